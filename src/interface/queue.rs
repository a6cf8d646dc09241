/// キューインタフェース
/// FIFO(first-in-first-out 先入れ先だし)
pub trait Queue<T> {
    /// 値xをQueueに追加する
    fn enqueue(&mut self, x: T);

    /// 以前に追加された「次の値」yをQueueから削除し、yを返す
    ///
    /// 空の場合はNoneを返す
    fn dequeue(&mut self) -> Option<T>;
}
