//! 基本的なソートアルゴリズムと動的なデータ構造
//!
//! - `data_structure` – DynamicArray, ArrayStack, 連結リストのStack/Queue, 2つのStackによるQueue
//! - `interface` – List, Stack, Queueインタフェース
//! - `sort` – マージソート, 挿入ソート, 選択ソート, シェルソート, Knuthのシャッフル
//! - `util` – 乱数配列の生成とコンソール出力
//!
//! ```rust
//! use classic_algorithms::data_structure::dynamic_array::DynamicArray;
//! use classic_algorithms::interface::list::List;
//! use classic_algorithms::sort::merge_sort;
//!
//! let mut array = DynamicArray::new();
//! array.append(10);
//! array.append(20);
//! array.append(30);
//! assert_eq!(array.remove_at(0), Ok(10));
//! assert_eq!(array.get(0), Ok(&20));
//!
//! let mut list = vec![5, 3, 3, 1, 4];
//! merge_sort(&mut list);
//! assert_eq!(list, vec![1, 3, 3, 4, 5]);
//! ```

pub mod data_structure;
pub mod error;
pub mod helper;
pub mod interface;
pub mod sort;
pub mod util;

pub use error::{Error, Result};
