//! 简体中文翻译 (zh-CN)

use super::keys::{BannerTexts, HeaderTexts, HintTexts, ListTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    header: HeaderTexts {
        title: "DNS 切换",
        subtitle: "选择要应用的 DNS 配置",
    },
    list: ListTexts {
        primary: "首选",
        secondary: "备用",
        system_default: "系统默认 DNS 配置",
        empty: "没有可用的 DNS 预设",
    },
    banner: BannerTexts {
        applied: "DNS 配置已成功应用！",
        failed: "DNS 配置应用失败",
    },
    hints: HintTexts {
        navigate: "选择",
        apply: "应用",
        cancel: "退出",
    },
};
