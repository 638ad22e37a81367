// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::SymbolSettings;

/// 未命中任何规则时的默认符号
pub const DEFAULT_SYMBOL: &str = "🛒";

const BUILTIN_RULES: &[(&str, &str)] = &[
    ("hidden camera detector", "📹"),
    ("gps tracker", "📍"),
    ("bug detector", "🐞"),
];

/// 商品符号规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRule {
    keyword: String,
    symbol: String,
}

/// 商品符号表
///
/// 有序的 (关键词, 符号) 列表。匹配时忽略大小写，按声明顺序检查，
/// 第一个作为子串出现在商品标题中的关键词胜出。空关键词在构造时被丢弃。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    rules: Vec<SymbolRule>,
    default_symbol: String,
}

impl SymbolTable {
    /// 创建符号表
    ///
    /// # 参数
    ///
    /// * `rules` - 按优先级排列的 (关键词, 符号)
    /// * `default_symbol` - 未命中时返回的符号
    pub fn new<I, K, S>(rules: I, default_symbol: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: Into<String>,
    {
        let rules = rules
            .into_iter()
            .map(|(keyword, symbol)| SymbolRule {
                keyword: keyword.into().to_lowercase(),
                symbol: symbol.into(),
            })
            .filter(|rule| !rule.keyword.is_empty())
            .collect();

        Self {
            rules,
            default_symbol: default_symbol.into(),
        }
    }

    /// 内置规则表
    pub fn builtin() -> Self {
        Self::new(BUILTIN_RULES.iter().copied(), DEFAULT_SYMBOL)
    }

    /// 解析商品标题对应的符号
    pub fn resolve(&self, product_title: &str) -> &str {
        let title = product_title.to_lowercase();
        self.rules
            .iter()
            .find(|rule| title.contains(&rule.keyword))
            .map(|rule| rule.symbol.as_str())
            .unwrap_or(self.default_symbol.as_str())
    }

    pub fn rules(&self) -> &[SymbolRule] {
        &self.rules
    }
}

impl From<&SymbolSettings> for SymbolTable {
    fn from(settings: &SymbolSettings) -> Self {
        let default_symbol = settings
            .default_symbol
            .clone()
            .unwrap_or_else(|| DEFAULT_SYMBOL.to_string());

        if settings.rules.is_empty() {
            return Self::new(BUILTIN_RULES.iter().copied(), default_symbol);
        }

        Self::new(
            settings
                .rules
                .iter()
                .map(|rule| (rule.keyword.clone(), rule.symbol.clone())),
            default_symbol,
        )
    }
}
