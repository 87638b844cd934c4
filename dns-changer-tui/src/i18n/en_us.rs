//! 英文翻译 (en-US)

use super::keys::{BannerTexts, HeaderTexts, HintTexts, ListTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    header: HeaderTexts {
        title: "DNS Changer",
        subtitle: "Select a DNS configuration to apply",
    },
    list: ListTexts {
        primary: "Primary",
        secondary: "Secondary",
        system_default: "System default DNS configuration",
        empty: "No DNS presets available",
    },
    banner: BannerTexts {
        applied: "DNS configuration applied successfully!",
        failed: "Failed to apply DNS",
    },
    hints: HintTexts {
        navigate: "Navigate",
        apply: "Apply",
        cancel: "Exit",
    },
};
