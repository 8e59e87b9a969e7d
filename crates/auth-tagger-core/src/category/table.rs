//! Category Table
//!
//! カテゴリ定義の順序付きテーブル。
//! 起動時に一度だけ構築し、以後は不変として分類器に渡す。

use std::collections::HashSet;

use crate::error::{Result, TaggerError};

use super::builtin::{category_file_name, CategoryDef, BUILTIN_CATEGORIES, FALLBACK_CATEGORY};

/// 順序付きカテゴリテーブル
#[derive(Debug, Clone)]
pub struct CategoryTable {
    categories: Vec<CategoryDef>,
}

impl CategoryTable {
    /// ビルトインカテゴリで初期化
    pub fn builtin() -> Self {
        let categories = BUILTIN_CATEGORIES.iter().map(CategoryDef::from).collect();
        Self { categories }
    }

    /// 任意のカテゴリ定義から構築
    ///
    /// 出力ファイル名（小文字化したカテゴリ名）で一意性を判定する。
    ///
    /// - 出力ファイル名が重複するカテゴリはエラー（`ADMIN`と`Admin`など）
    /// - フォールバックと同じ出力ファイル名のカテゴリはエラー
    pub fn new(categories: Vec<CategoryDef>) -> Result<Self> {
        let fallback_file = category_file_name(FALLBACK_CATEGORY);
        let mut seen = HashSet::new();
        for cat in &categories {
            let file_name = cat.file_name();
            if file_name == fallback_file {
                return Err(TaggerError::ReservedCategory {
                    name: cat.name.clone(),
                });
            }
            if !seen.insert(file_name) {
                return Err(TaggerError::DuplicateCategory {
                    name: cat.name.clone(),
                });
            }
        }
        Ok(Self { categories })
    }

    /// カテゴリ定義を取得
    pub fn get(&self, name: &str) -> Option<&CategoryDef> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// 全カテゴリを取得（宣言順）
    pub fn all(&self) -> &[CategoryDef] {
        &self.categories
    }

    /// カテゴリ名一覧（宣言順、フォールバックは含まない）
    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_table_builtin() {
        let table = CategoryTable::builtin();
        assert!(table.get("ADMIN").is_some());
        assert!(table.get("LOGIN").is_some());
        assert!(table.get("OTHER").is_none());
        assert_eq!(table.names(), vec!["ADMIN", "RESET", "TOKEN", "LOGIN"]);
    }

    #[test]
    fn test_category_table_preserves_order() {
        let table = CategoryTable::new(vec![
            CategoryDef::new("B", &["b"]),
            CategoryDef::new("A", &["a"]),
        ])
        .unwrap();
        assert_eq!(table.names(), vec!["B", "A"]);
    }

    #[test]
    fn test_category_table_rejects_duplicates() {
        let result = CategoryTable::new(vec![
            CategoryDef::new("ADMIN", &["admin"]),
            CategoryDef::new("ADMIN", &["root"]),
        ]);
        assert!(matches!(
            result,
            Err(TaggerError::DuplicateCategory { name }) if name == "ADMIN"
        ));
    }

    #[test]
    fn test_category_table_rejects_case_variant_names() {
        let result = CategoryTable::new(vec![
            CategoryDef::new("ADMIN", &["admin"]),
            CategoryDef::new("Admin", &["root"]),
        ]);
        assert!(matches!(
            result,
            Err(TaggerError::DuplicateCategory { name }) if name == "Admin"
        ));
    }

    #[test]
    fn test_category_table_rejects_fallback_name() {
        let result = CategoryTable::new(vec![CategoryDef::new("other", &["x"])]);
        assert!(matches!(result, Err(TaggerError::ReservedCategory { .. })));
    }

    #[test]
    fn test_category_table_empty() {
        let table = CategoryTable::new(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
