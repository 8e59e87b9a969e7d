//! Category Classifier
//!
//! 入力行をCategoryTableの定義に基づいて分類する。

use regex::{Regex, RegexBuilder};

use crate::error::{Result, TaggerError};

use super::builtin::{CategoryDef, FALLBACK_CATEGORY};
use super::table::CategoryTable;

/// 1行の分類結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    /// 割り当てられたカテゴリ名
    pub category: &'a str,
    /// いずれかのパターンにマッチしたか（falseならフォールバック）
    pub matched: bool,
}

/// 分類済みの行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedLine {
    /// 割り当てられたカテゴリ名
    pub category: String,
    /// 元の行のバイト列（行末の改行を含む、デコードしない）
    pub line: Vec<u8>,
    /// 前後の空白を除去した行
    pub stripped: String,
}

impl TaggedLine {
    /// マスターファイル用の表示文字列（`[LOGIN] /login.php`）
    pub fn display(&self) -> String {
        format!("[{}] {}", self.category, self.stripped)
    }
}

struct CompiledCategory {
    name: String,
    patterns: Vec<Regex>,
}

/// カテゴリ分類器
pub struct CategoryClassifier {
    compiled: Vec<CompiledCategory>,
}

impl CategoryClassifier {
    /// 新規分類器を作成（パターンは大文字小文字を区別せずにコンパイル）
    pub fn new(table: CategoryTable) -> Result<Self> {
        let compiled = table
            .all()
            .iter()
            .map(compile_category)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { compiled })
    }

    /// ビルトインカテゴリのみで分類器を構築
    pub fn builtin() -> Result<Self> {
        Self::new(CategoryTable::builtin())
    }

    /// 1行を分類
    ///
    /// カテゴリを宣言順に、各カテゴリ内のパターンを宣言順に検索し、
    /// 最初にマッチしたカテゴリを返す。どれにもマッチしなければ`OTHER`。
    pub fn classify(&self, line: &str) -> Classification<'_> {
        for cat in &self.compiled {
            if cat.patterns.iter().any(|p| p.is_match(line)) {
                return Classification {
                    category: &cat.name,
                    matched: true,
                };
            }
        }

        Classification {
            category: FALLBACK_CATEGORY,
            matched: false,
        }
    }

    /// 生の1行を分類してTaggedLineを生成
    ///
    /// UTF-8として不正なバイトは分類と表示のためだけに置換文字へ変換する。
    pub fn tag(&self, raw_line: &[u8]) -> TaggedLine {
        let line = String::from_utf8_lossy(raw_line);
        let classification = self.classify(&line);
        TaggedLine {
            category: classification.category.to_string(),
            line: raw_line.to_vec(),
            stripped: line.trim().to_string(),
        }
    }
}

fn compile_category(cat: &CategoryDef) -> Result<CompiledCategory> {
    let patterns = cat
        .patterns
        .iter()
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .map_err(|source| TaggerError::InvalidPattern {
                    category: cat.name.clone(),
                    pattern: p.clone(),
                    source,
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CompiledCategory {
        name: cat.name.clone(),
        patterns,
    })
}
