//! # Category Module
//!
//! URL一覧の各行を認証関連のカテゴリに分類する機能を提供する。
//!
//! ## カテゴリ
//!
//! - **ADMIN**: 管理画面、バックオフィス、ダッシュボード
//! - **RESET**: パスワードリセット、アカウント復旧
//! - **TOKEN**: トークン発行、セッション、JWT
//! - **LOGIN**: ログイン、認証
//! - **OTHER**: どのパターンにもマッチしない行（フォールバック）
//!
//! テーブルの宣言順が優先順であり、複数カテゴリにマッチする行は
//! 先に宣言されたカテゴリに分類される。
//!
//! ## モジュール構成
//!
//! - `builtin`: ビルトインカテゴリ定義
//! - `table`: 順序付きカテゴリテーブル
//! - `classifier`: 分類器
//!
//! ## 使用例
//!
//! ```rust
//! use auth_tagger_core::category::{CategoryClassifier, CategoryTable};
//!
//! let table = CategoryTable::builtin();
//! assert_eq!(table.names(), vec!["ADMIN", "RESET", "TOKEN", "LOGIN"]);
//!
//! let classifier = CategoryClassifier::new(table).unwrap();
//! assert_eq!(classifier.classify("/admin/dashboard").category, "ADMIN");
//! assert_eq!(classifier.classify("/reset-password?token=abc123").category, "RESET");
//! assert_eq!(classifier.classify("/static/image.png").category, "OTHER");
//! ```

mod builtin;
mod classifier;
mod table;

// Re-exports
pub use builtin::{
    category_file_name, BuiltinCategory, CategoryDef, BUILTIN_CATEGORIES, FALLBACK_CATEGORY,
};
pub use classifier::{CategoryClassifier, Classification, TaggedLine};
pub use table::CategoryTable;
