//! Bilingual copy for the documentation shell and pages.
//!
//! Every user-visible string is looked up through [`Language::strings`]. The
//! tables are plain `'static` data so switching languages is a pointer swap
//! and never allocates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported interface languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Pt,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown language '{0}', expected 'en' or 'pt'")]
pub struct UnknownLanguage(pub String);

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Pt];

    #[must_use]
    pub fn strings(self) -> &'static Translations {
        match self {
            Language::En => &EN,
            Language::Pt => &PT,
        }
    }

    /// Short code shown on the language switch
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Pt => "PT",
        }
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Pt,
            Language::Pt => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::En => "en",
            Language::Pt => "pt",
        })
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Language::En),
            "pt" | "pt-br" | "portuguese" | "português" => Ok(Language::Pt),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct Translations {
    pub nav: NavStrings,
    pub header: HeaderStrings,
    pub footer: FooterStrings,
    pub status: StatusStrings,
    pub intro: IntroStrings,
    pub install: InstallStrings,
    pub colors: ColorStrings,
    pub typography: TypographyStrings,
    pub button: ButtonStrings,
    pub card: CardStrings,
    pub combobox: ComboboxStrings,
    pub accordion: AccordionStrings,
    pub alerts: AlertStrings,
    pub dialogs: DialogStrings,
    pub avatars: AvatarStrings,
    pub badges: BadgeStrings,
}

#[derive(Debug)]
pub struct NavStrings {
    pub title: &'static str,
    pub getting_started: &'static str,
    pub foundations: &'static str,
    pub components: &'static str,
    pub intro: &'static str,
    pub install: &'static str,
    pub colors: &'static str,
    pub typography: &'static str,
    pub button: &'static str,
    pub card: &'static str,
    pub combobox: &'static str,
    pub accordion: &'static str,
    pub alerts: &'static str,
    pub dialogs: &'static str,
    pub avatars: &'static str,
    pub badges: &'static str,
}

#[derive(Debug)]
pub struct HeaderStrings {
    pub search_placeholder: &'static str,
    pub search_input: &'static str,
    pub search_empty: &'static str,
    pub github: &'static str,
    pub get_started: &'static str,
}

#[derive(Debug)]
pub struct FooterStrings {
    pub copy: &'static str,
    pub docs: &'static str,
    pub support: &'static str,
    pub changelog: &'static str,
}

#[derive(Debug)]
pub struct StatusStrings {
    pub hints: &'static str,
    pub help_title: &'static str,
    pub help_body: &'static str,
    pub logs_title: &'static str,
    pub logs_empty: &'static str,
    pub info_title: &'static str,
    pub error_title: &'static str,
    /// Labels of the dialog key hints
    pub key_close: &'static str,
    pub key_ok: &'static str,
    pub key_scroll: &'static str,
    pub key_switch: &'static str,
    pub key_confirm: &'static str,
    pub key_cancel: &'static str,
}

#[derive(Debug)]
pub struct IntroStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub ai_first_title: &'static str,
    pub ai_first_desc: &'static str,
    pub clinical_precision_title: &'static str,
    pub clinical_precision_desc: &'static str,
    pub user_profiles: &'static str,
    pub dentists: &'static str,
    pub dentists_desc: &'static str,
    pub secretaries: &'static str,
    pub secretaries_desc: &'static str,
    pub managers: &'static str,
    pub managers_desc: &'static str,
    pub ai_suggestion: &'static str,
    pub ai_suggestion_text: &'static str,
}

#[derive(Debug)]
pub struct InstallStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub steps: &'static [(&'static str, &'static str)],
}

#[derive(Debug)]
pub struct ColorStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub brand_status: &'static str,
    pub brand_orange: &'static str,
    pub brand_orange_desc: &'static str,
    pub success: &'static str,
    pub success_desc: &'static str,
    pub warning: &'static str,
    pub warning_desc: &'static str,
    pub danger: &'static str,
    pub danger_desc: &'static str,
    pub info: &'static str,
    pub info_desc: &'static str,
}

#[derive(Debug)]
pub struct TypographyStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub h1: &'static str,
    pub h2: &'static str,
    pub body: &'static str,
    pub sample_text: &'static str,
    pub desc: &'static str,
}

#[derive(Debug)]
pub struct ButtonStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub variants: &'static str,
    pub variants_desc: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub outline: &'static str,
    pub ghost: &'static str,
    pub danger: &'static str,
    pub success: &'static str,
    pub link: &'static str,
    pub sizes: &'static str,
    pub sizes_desc: &'static str,
    pub small: &'static str,
    pub medium: &'static str,
    pub large: &'static str,
    pub states: &'static str,
    pub states_desc: &'static str,
    pub loading: &'static str,
    pub disabled: &'static str,
    pub group: &'static str,
    pub group_desc: &'static str,
    pub group_items: [&'static str; 3],
    pub ai_enhanced: &'static str,
    pub ai_enhanced_desc: &'static str,
    pub generate_report: &'static str,
    pub pressed: &'static str,
}

#[derive(Debug)]
pub struct CardStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub card_title: &'static str,
    pub card_desc: &'static str,
    pub card_content: &'static str,
}

#[derive(Debug)]
pub struct ComboboxStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub placeholder: &'static str,
    pub search_placeholder: &'static str,
    pub empty: &'static str,
    pub loading: &'static str,
    pub basic: &'static str,
    pub grouped: &'static str,
    pub form: &'static str,
    pub states: &'static str,
    pub controlled: &'static str,
    pub field_label: &'static str,
    pub helper: &'static str,
    pub error: &'static str,
    pub toggle_error: &'static str,
    pub disabled: &'static str,
    pub selected_value: &'static str,
    pub nothing_selected: &'static str,
    pub all_specialties: &'static str,
    pub group_clinical: &'static str,
    pub group_admin: &'static str,
    pub specialties: &'static [(&'static str, &'static str)],
    pub roles: &'static [(&'static str, &'static str)],
}

#[derive(Debug)]
pub struct AccordionStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub single: &'static str,
    pub multiple: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

#[derive(Debug)]
pub struct AlertStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub default_title: &'static str,
    pub default_desc: &'static str,
    pub destructive_title: &'static str,
    pub destructive_desc: &'static str,
    pub success_title: &'static str,
    pub success_desc: &'static str,
    pub info_title: &'static str,
    pub info_desc: &'static str,
    pub warning_title: &'static str,
    pub warning_desc: &'static str,
}

#[derive(Debug)]
pub struct DialogStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub open: &'static str,
    pub dialog_title: &'static str,
    pub dialog_desc: &'static str,
    pub cancel: &'static str,
    pub confirm: &'static str,
    pub confirmed: &'static str,
    pub cancelled: &'static str,
}

#[derive(Debug)]
pub struct AvatarStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub sizes: &'static str,
    pub fallback: &'static str,
    pub group: &'static str,
    pub people: &'static [&'static str],
}

#[derive(Debug)]
pub struct BadgeStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub variants: &'static str,
    pub shapes: &'static str,
    pub new: &'static str,
    pub verified: &'static str,
}

pub static EN: Translations = Translations {
    nav: NavStrings {
        title: "Navigation",
        getting_started: "Getting Started",
        foundations: "Foundations",
        components: "Components",
        intro: "Introduction",
        install: "Installation",
        colors: "Colors",
        typography: "Typography",
        button: "Buttons",
        card: "Cards",
        combobox: "Combobox",
        accordion: "Accordion",
        alerts: "Alerts",
        dialogs: "Dialogs",
        avatars: "Avatars",
        badges: "Badges",
    },
    header: HeaderStrings {
        search_placeholder: "Search documentation...",
        search_input: "Type to filter pages...",
        search_empty: "No pages found.",
        github: "GitHub",
        get_started: "Get Started",
    },
    footer: FooterStrings {
        copy: "© 2025 CliniDS Design System. Built for clinical excellence.",
        docs: "Documentation",
        support: "Support",
        changelog: "Changelog",
    },
    status: StatusStrings {
        hints: "Tab: focus • Enter: activate • /: search pages • l: language • ?: help • q: quit",
        help_title: "Keyboard shortcuts",
        help_body: "NAVIGATION\n----------\nJ/K, Shift+↑↓   Previous/next page\nTab/Shift+Tab  Move focus between widgets\nEnter/Space    Activate focused widget\nPgUp/PgDn      Scroll page content\n/              Search pages\nb              Show/hide sidebar\n\nCOMBOBOX\n--------\nEnter/↓        Open list\nType           Filter options\n↑↓             Move highlight\nEnter          Select (again to clear)\nDelete         Clear selection\nEsc            Close list\n\nGENERAL\n-------\nl              Switch language\ni              Cycle icon theme\nG              Show logs\n?              Toggle help\nq, Ctrl+C      Quit",
        logs_title: "Logs",
        logs_empty: "No log entries yet",
        info_title: "Info",
        error_title: "Error",
        key_close: "Close",
        key_ok: "OK",
        key_scroll: "Scroll",
        key_switch: "Switch",
        key_confirm: "Confirm",
        key_cancel: "Cancel",
    },
    intro: IntroStrings {
        title: "CliniDS Design System",
        subtitle: "A complete design language for clinic management software: consistent, accessible and ready for AI-assisted workflows.",
        ai_first_title: "AI-first",
        ai_first_desc: "Components designed to present suggestions, summaries and automations without taking control away from the team.",
        clinical_precision_title: "Clinical precision",
        clinical_precision_desc: "Clear hierarchy and unambiguous states for data that matters: appointments, records and payments.",
        user_profiles: "User profiles",
        dentists: "Dentists",
        dentists_desc: "Fast access to records, odontograms and treatment plans.",
        secretaries: "Secretaries",
        secretaries_desc: "Scheduling, confirmations and front-desk routines.",
        managers: "Managers",
        managers_desc: "Financial indicators, reports and team performance.",
        ai_suggestion: "AI suggestion",
        ai_suggestion_text: "\"3 patients have not confirmed tomorrow's appointments. Would you like to send a reminder?\"",
    },
    install: InstallStrings {
        title: "Installation",
        subtitle: "Add CliniDS to your project in a few steps.",
        steps: &[
            ("Install the package", "npm install @clinids/ui"),
            ("Import the styles", "import \"@clinids/ui/styles.css\""),
            ("Use a component", "import { Button } from \"@clinids/ui\""),
        ],
    },
    colors: ColorStrings {
        title: "Colors",
        subtitle: "The palette communicates brand identity and system status.",
        brand_status: "Brand & status",
        brand_orange: "Brand orange",
        brand_orange_desc: "Primary actions, highlights and brand presence.",
        success: "Success",
        success_desc: "Confirmations, completed payments and positive states.",
        warning: "Warning",
        warning_desc: "Pending items and situations that need attention.",
        danger: "Danger",
        danger_desc: "Errors, destructive actions and critical alerts.",
        info: "Info",
        info_desc: "Neutral information, tips and links.",
    },
    typography: TypographyStrings {
        title: "Typography",
        subtitle: "Type scale built for legibility on dense clinical screens.",
        h1: "Heading 1",
        h2: "Heading 2",
        body: "Body",
        sample_text: "The quick brown fox",
        desc: "Body text is used for descriptions, forms and long reading content. It keeps a comfortable line height and a neutral tone.",
    },
    button: ButtonStrings {
        title: "Buttons",
        subtitle: "Buttons trigger actions. Use variants to communicate importance.",
        variants: "Variants",
        variants_desc: "Each variant has a specific role in the interface hierarchy.",
        primary: "Primary",
        secondary: "Secondary",
        outline: "Outline",
        ghost: "Ghost",
        danger: "Danger",
        success: "Success",
        link: "Link",
        sizes: "Sizes",
        sizes_desc: "Small, medium, large and icon-only buttons.",
        small: "Small",
        medium: "Medium",
        large: "Large",
        states: "States",
        states_desc: "Loading and disabled buttons do not respond to interaction.",
        loading: "Loading",
        disabled: "Disabled",
        group: "Button group",
        group_desc: "Related actions joined into a single control.",
        group_items: ["Day", "Week", "Month"],
        ai_enhanced: "AI-enhanced actions",
        ai_enhanced_desc: "Actions powered by AI receive a distinct glow so users always know when automation is involved.",
        generate_report: "Generate report",
        pressed: "Pressed",
    },
    card: CardStrings {
        title: "Cards",
        subtitle: "Cards group related content and actions.",
        card_title: "Next appointment",
        card_desc: "Today at 14:30 · Room 2",
        card_content: "Maria Silva · Orthodontic maintenance",
    },
    combobox: ComboboxStrings {
        title: "Combobox",
        subtitle: "Select one option from a searchable list. Selecting the current option again clears it.",
        placeholder: "Select option...",
        search_placeholder: "Search...",
        empty: "No results found.",
        loading: "Loading...",
        basic: "Basic",
        grouped: "Grouped, with icons and clear",
        form: "Form field",
        states: "Disabled and loading",
        controlled: "Controlled",
        field_label: "Specialty",
        helper: "Used to route the patient to the right professional.",
        error: "Please choose a specialty.",
        toggle_error: "Toggle error",
        disabled: "Disabled",
        selected_value: "Selected value",
        nothing_selected: "none",
        all_specialties: "All specialties",
        group_clinical: "Clinical",
        group_admin: "Administrative",
        specialties: &[
            ("orthodontics", "Orthodontics"),
            ("endodontics", "Endodontics"),
            ("periodontics", "Periodontics"),
            ("implantology", "Implantology"),
            ("pediatric", "Pediatric dentistry"),
        ],
        roles: &[
            ("reception", "Reception"),
            ("billing", "Billing"),
            ("management", "Management"),
        ],
    },
    accordion: AccordionStrings {
        title: "Accordion",
        subtitle: "Vertically stacked headings that reveal a section of content.",
        single: "Single (one open at a time)",
        multiple: "Multiple",
        items: &[
            ("Is it accessible?", "Yes. Every trigger is keyboard reachable and announces its state."),
            ("Is it styled?", "Yes. It follows the CliniDS tokens for spacing, color and typography."),
            ("Is it animated?", "Yes, subtly. Content expands without moving the rest of the page."),
        ],
    },
    alerts: AlertStrings {
        title: "Alerts",
        subtitle: "Alerts call attention to important messages.",
        default_title: "Heads up!",
        default_desc: "You can add components to your app using the CLI.",
        destructive_title: "Error",
        destructive_desc: "Your session has expired. Please log in again.",
        success_title: "Payment received",
        success_desc: "The invoice was marked as paid.",
        info_title: "New feature",
        info_desc: "Appointment reminders can now be sent automatically.",
        warning_title: "Pending confirmation",
        warning_desc: "3 appointments for tomorrow are not confirmed yet.",
    },
    dialogs: DialogStrings {
        title: "Dialogs",
        subtitle: "A window overlaid on the page that requires a decision.",
        open: "Open dialog",
        dialog_title: "Cancel appointment?",
        dialog_desc: "The patient will be notified and the slot released. This action cannot be undone.",
        cancel: "Keep",
        confirm: "Cancel appointment",
        confirmed: "Appointment cancelled.",
        cancelled: "Nothing changed.",
    },
    avatars: AvatarStrings {
        title: "Avatars",
        subtitle: "Images or initials that represent a person.",
        sizes: "Sizes",
        fallback: "Fallback initials",
        group: "Avatar group",
        people: &["Ana Costa", "Bruno Lima", "Carla Souza", "Diego Alves", "Elisa Rocha"],
    },
    badges: BadgeStrings {
        title: "Badges",
        subtitle: "Small status descriptors for UI elements.",
        variants: "Variants",
        shapes: "Shapes",
        new: "New",
        verified: "Verified",
    },
};

pub static PT: Translations = Translations {
    nav: NavStrings {
        title: "Navegação",
        getting_started: "Primeiros passos",
        foundations: "Fundamentos",
        components: "Componentes",
        intro: "Introdução",
        install: "Instalação",
        colors: "Cores",
        typography: "Tipografia",
        button: "Botões",
        card: "Cards",
        combobox: "Combobox",
        accordion: "Acordeão",
        alerts: "Alertas",
        dialogs: "Diálogos",
        avatars: "Avatares",
        badges: "Badges",
    },
    header: HeaderStrings {
        search_placeholder: "Buscar na documentação...",
        search_input: "Digite para filtrar páginas...",
        search_empty: "Nenhuma página encontrada.",
        github: "GitHub",
        get_started: "Começar",
    },
    footer: FooterStrings {
        copy: "© 2025 CliniDS Design System. Feito para a excelência clínica.",
        docs: "Documentação",
        support: "Suporte",
        changelog: "Novidades",
    },
    status: StatusStrings {
        hints: "Tab: foco • Enter: ativar • /: buscar páginas • l: idioma • ?: ajuda • q: sair",
        help_title: "Atalhos de teclado",
        help_body: "NAVEGAÇÃO\n---------\nJ/K, Shift+↑↓   Página anterior/próxima\nTab/Shift+Tab  Mover o foco entre componentes\nEnter/Espaço   Ativar componente em foco\nPgUp/PgDn      Rolar o conteúdo\n/              Buscar páginas\nb              Mostrar/ocultar menu lateral\n\nCOMBOBOX\n--------\nEnter/↓        Abrir lista\nDigitar        Filtrar opções\n↑↓             Mover destaque\nEnter          Selecionar (de novo para limpar)\nDelete         Limpar seleção\nEsc            Fechar lista\n\nGERAL\n-----\nl              Trocar idioma\ni              Alternar tema de ícones\nG              Ver logs\n?              Ajuda\nq, Ctrl+C      Sair",
        logs_title: "Logs",
        logs_empty: "Nenhum registro ainda",
        info_title: "Informação",
        error_title: "Erro",
        key_close: "Fechar",
        key_ok: "OK",
        key_scroll: "Rolar",
        key_switch: "Alternar",
        key_confirm: "Confirmar",
        key_cancel: "Cancelar",
    },
    intro: IntroStrings {
        title: "CliniDS Design System",
        subtitle: "Uma linguagem de design completa para software de gestão de clínicas: consistente, acessível e pronta para fluxos assistidos por IA.",
        ai_first_title: "IA em primeiro lugar",
        ai_first_desc: "Componentes pensados para apresentar sugestões, resumos e automações sem tirar o controle da equipe.",
        clinical_precision_title: "Precisão clínica",
        clinical_precision_desc: "Hierarquia clara e estados sem ambiguidade para dados que importam: consultas, prontuários e pagamentos.",
        user_profiles: "Perfis de usuário",
        dentists: "Dentistas",
        dentists_desc: "Acesso rápido a prontuários, odontogramas e planos de tratamento.",
        secretaries: "Secretárias",
        secretaries_desc: "Agendamentos, confirmações e rotinas de recepção.",
        managers: "Gestores",
        managers_desc: "Indicadores financeiros, relatórios e desempenho da equipe.",
        ai_suggestion: "Sugestão da IA",
        ai_suggestion_text: "\"3 pacientes ainda não confirmaram as consultas de amanhã. Deseja enviar um lembrete?\"",
    },
    install: InstallStrings {
        title: "Instalação",
        subtitle: "Adicione o CliniDS ao seu projeto em poucos passos.",
        steps: &[
            ("Instale o pacote", "npm install @clinids/ui"),
            ("Importe os estilos", "import \"@clinids/ui/styles.css\""),
            ("Use um componente", "import { Button } from \"@clinids/ui\""),
        ],
    },
    colors: ColorStrings {
        title: "Cores",
        subtitle: "A paleta comunica a identidade da marca e o status do sistema.",
        brand_status: "Marca e status",
        brand_orange: "Laranja da marca",
        brand_orange_desc: "Ações principais, destaques e presença da marca.",
        success: "Sucesso",
        success_desc: "Confirmações, pagamentos concluídos e estados positivos.",
        warning: "Atenção",
        warning_desc: "Pendências e situações que pedem atenção.",
        danger: "Perigo",
        danger_desc: "Erros, ações destrutivas e alertas críticos.",
        info: "Informação",
        info_desc: "Informações neutras, dicas e links.",
    },
    typography: TypographyStrings {
        title: "Tipografia",
        subtitle: "Escala tipográfica pensada para legibilidade em telas clínicas densas.",
        h1: "Título 1",
        h2: "Título 2",
        body: "Corpo",
        sample_text: "A rápida raposa marrom",
        desc: "O texto de corpo é usado em descrições, formulários e conteúdos longos. Mantém entrelinha confortável e tom neutro.",
    },
    button: ButtonStrings {
        title: "Botões",
        subtitle: "Botões disparam ações. Use variantes para comunicar importância.",
        variants: "Variantes",
        variants_desc: "Cada variante tem um papel específico na hierarquia da interface.",
        primary: "Primário",
        secondary: "Secundário",
        outline: "Contorno",
        ghost: "Fantasma",
        danger: "Perigo",
        success: "Sucesso",
        link: "Link",
        sizes: "Tamanhos",
        sizes_desc: "Botões pequenos, médios, grandes e somente ícone.",
        small: "Pequeno",
        medium: "Médio",
        large: "Grande",
        states: "Estados",
        states_desc: "Botões carregando ou desabilitados não respondem à interação.",
        loading: "Carregando",
        disabled: "Desabilitado",
        group: "Grupo de botões",
        group_desc: "Ações relacionadas unidas em um único controle.",
        group_items: ["Dia", "Semana", "Mês"],
        ai_enhanced: "Ações com IA",
        ai_enhanced_desc: "Ações movidas por IA recebem um brilho próprio para que o usuário sempre saiba quando há automação envolvida.",
        generate_report: "Gerar relatório",
        pressed: "Pressionado",
    },
    card: CardStrings {
        title: "Cards",
        subtitle: "Cards agrupam conteúdos e ações relacionados.",
        card_title: "Próxima consulta",
        card_desc: "Hoje às 14:30 · Sala 2",
        card_content: "Maria Silva · Manutenção ortodôntica",
    },
    combobox: ComboboxStrings {
        title: "Combobox",
        subtitle: "Selecione uma opção em uma lista pesquisável. Selecionar a opção atual novamente a remove.",
        placeholder: "Selecione uma opção...",
        search_placeholder: "Buscar...",
        empty: "Nenhum resultado encontrado.",
        loading: "Carregando...",
        basic: "Básico",
        grouped: "Agrupado, com ícones e limpar",
        form: "Campo de formulário",
        states: "Desabilitado e carregando",
        controlled: "Controlado",
        field_label: "Especialidade",
        helper: "Usada para encaminhar o paciente ao profissional certo.",
        error: "Escolha uma especialidade.",
        toggle_error: "Alternar erro",
        disabled: "Desabilitado",
        selected_value: "Valor selecionado",
        nothing_selected: "nenhum",
        all_specialties: "Todas as especialidades",
        group_clinical: "Clínico",
        group_admin: "Administrativo",
        specialties: &[
            ("orthodontics", "Ortodontia"),
            ("endodontics", "Endodontia"),
            ("periodontics", "Periodontia"),
            ("implantology", "Implantodontia"),
            ("pediatric", "Odontopediatria"),
        ],
        roles: &[
            ("reception", "Recepção"),
            ("billing", "Faturamento"),
            ("management", "Gestão"),
        ],
    },
    accordion: AccordionStrings {
        title: "Acordeão",
        subtitle: "Títulos empilhados que revelam uma seção de conteúdo.",
        single: "Único (um aberto por vez)",
        multiple: "Múltiplo",
        items: &[
            ("É acessível?", "Sim. Cada gatilho é alcançável pelo teclado e anuncia seu estado."),
            ("É estilizado?", "Sim. Segue os tokens do CliniDS para espaçamento, cor e tipografia."),
            ("É animado?", "Sim, de forma sutil. O conteúdo expande sem deslocar o resto da página."),
        ],
    },
    alerts: AlertStrings {
        title: "Alertas",
        subtitle: "Alertas chamam a atenção para mensagens importantes.",
        default_title: "Atenção!",
        default_desc: "Você pode adicionar componentes ao seu app usando a CLI.",
        destructive_title: "Erro",
        destructive_desc: "Sua sessão expirou. Entre novamente.",
        success_title: "Pagamento recebido",
        success_desc: "A fatura foi marcada como paga.",
        info_title: "Novidade",
        info_desc: "Lembretes de consulta agora podem ser enviados automaticamente.",
        warning_title: "Confirmação pendente",
        warning_desc: "3 consultas de amanhã ainda não foram confirmadas.",
    },
    dialogs: DialogStrings {
        title: "Diálogos",
        subtitle: "Uma janela sobreposta à página que exige uma decisão.",
        open: "Abrir diálogo",
        dialog_title: "Cancelar consulta?",
        dialog_desc: "O paciente será avisado e o horário liberado. Esta ação não pode ser desfeita.",
        cancel: "Manter",
        confirm: "Cancelar consulta",
        confirmed: "Consulta cancelada.",
        cancelled: "Nada foi alterado.",
    },
    avatars: AvatarStrings {
        title: "Avatares",
        subtitle: "Imagens ou iniciais que representam uma pessoa.",
        sizes: "Tamanhos",
        fallback: "Iniciais de fallback",
        group: "Grupo de avatares",
        people: &["Ana Costa", "Bruno Lima", "Carla Souza", "Diego Alves", "Elisa Rocha"],
    },
    badges: BadgeStrings {
        title: "Badges",
        subtitle: "Pequenos descritores de status para elementos da interface.",
        variants: "Variantes",
        shapes: "Formatos",
        new: "Novo",
        verified: "Verificado",
    },
};
