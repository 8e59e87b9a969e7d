//! Builtin Category Definitions
//!
//! コード内で定義されるビルトインカテゴリ。
//! 宣言順がそのまま分類の優先順になる（先に宣言されたカテゴリが勝つ）。

use serde::Serialize;

/// どのパターンにもマッチしない行に割り当てるカテゴリ
pub const FALLBACK_CATEGORY: &str = "OTHER";

/// ビルトインカテゴリ定義（宣言順 = 優先順）
pub const BUILTIN_CATEGORIES: &[BuiltinCategory] = &[
    BuiltinCategory {
        name: "ADMIN",
        description: "Administration panels, back offices, dashboards and staff consoles.",
        patterns: &[
            r"admin",
            r"administrator",
            r"backoffice",
            r"\bbo\b",
            r"tableau[-_ ]?de[-_ ]?bord",
            r"gestion",
            r"dashboard",
            r"cms",
            r"console",
            r"backend",
            r"staff",
            r"superviseur",
            r"superadmin",
        ],
    },
    BuiltinCategory {
        name: "RESET",
        description: "Password reset, recovery and account change flows.",
        patterns: &[
            r"reset",
            r"forgot",
            r"recover",
            r"change",
            r"create",
            r"oubli",
            r"modifier",
            r"reinitialiser",
            r"reinit",
            r"mot[-_ ]?de[-_ ]?passe",
        ],
    },
    BuiltinCategory {
        name: "TOKEN",
        description: "Token issuance, sessions, JWTs and API keys.",
        patterns: &[
            r"token",
            r"jwt",
            r"session",
            r"refresh",
            r"access[-_ ]?token",
            r"id[-_ ]?token",
            r"jeton",
            r"cle[-_ ]?api",
            r"grant_type=",
            r"access_token=",
            r"refresh_token=",
        ],
    },
    BuiltinCategory {
        name: "LOGIN",
        description: "Sign-in and authentication endpoints.",
        patterns: &[
            r"login",
            r"sign[-_ ]?in",
            r"auth(enticate)?",
            r"connexion",
            r"connecter",
            r"se[-_ ]?connecter",
            r"identification",
            r"authentification",
        ],
    },
];

/// ビルトインカテゴリの静的定義
#[derive(Debug, Clone)]
pub struct BuiltinCategory {
    /// カテゴリ名（一意識別子、出力ファイル名は小文字化したもの）
    pub name: &'static str,
    /// カテゴリの説明
    pub description: &'static str,
    /// 正規表現パターン（宣言順に評価）
    pub patterns: &'static [&'static str],
}

/// ランタイムカテゴリ定義
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDef {
    /// カテゴリ名
    pub name: String,
    /// カテゴリの説明
    pub description: String,
    /// 正規表現パターン
    pub patterns: Vec<String>,
}

impl CategoryDef {
    pub fn new(name: impl Into<String>, patterns: &[&str]) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            patterns: patterns.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// カテゴリ出力ファイル名（`admin.txt`等）
    pub fn file_name(&self) -> String {
        category_file_name(&self.name)
    }
}

impl From<&BuiltinCategory> for CategoryDef {
    fn from(builtin: &BuiltinCategory) -> Self {
        Self {
            name: builtin.name.to_string(),
            description: builtin.description.to_string(),
            patterns: builtin.patterns.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// カテゴリ名から出力ファイル名を生成
pub fn category_file_name(category: &str) -> String {
    format!("{}.txt", category.to_lowercase())
}
