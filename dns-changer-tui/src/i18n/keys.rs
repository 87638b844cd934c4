//! 翻译键定义
//!
//! 按 UI 组件位置分类：文本归属于它出现的 UI 组件。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 顶部标题区
    pub header: HeaderTexts,
    /// 预设列表
    pub list: ListTexts,
    /// 成功提示
    pub banner: BannerTexts,
    /// 状态栏快捷键提示
    pub hints: HintTexts,
}

/// 顶部标题区文本
pub struct HeaderTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// 预设列表文本
pub struct ListTexts {
    pub primary: &'static str,
    pub secondary: &'static str,
    /// “系统默认”项的说明
    pub system_default: &'static str,
    /// 列表为空时的提示
    pub empty: &'static str,
}

/// 成功提示文本
pub struct BannerTexts {
    pub applied: &'static str,
    pub failed: &'static str,
}

/// 快捷键提示（按键名称 + 动作词）
pub struct HintTexts {
    pub navigate: &'static str,
    pub apply: &'static str,
    pub cancel: &'static str,
}
