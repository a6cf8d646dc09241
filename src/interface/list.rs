use crate::error::Result;

/// 値の列x(0)..x(n-1)とその列に対する操作からなる
pub trait List<T> {
    /// リストの長さnを返す
    fn size(&self) -> usize;

    /// x(i)の値を返す
    ///
    /// i >= nの場合はErrを返す
    fn get(&self, i: usize) -> Result<&T>;

    /// xをx(n)として末尾に追加する
    fn append(&mut self, x: T);

    /// x(i)を削除し、x(i+1)..x(n-1)を前にずらす
    fn remove_at(&mut self, i: usize) -> Result<T>;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
