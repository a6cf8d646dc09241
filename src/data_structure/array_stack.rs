use log::debug;

use crate::interface::stack::Stack;

const MIN_CAPACITY: usize = 4;

/// 配列を使ったStackの実装
///
/// 配列の末尾をStackの先頭とみなす
/// 長さの変更方針はDynamicArrayと同じで、満杯なら2倍、1/4以下になったら半分にする
/// push(x), pop()の実行時間はresize()を含めて償却O(1)
#[derive(Debug)]
pub struct ArrayStack<T> {
    a: Box<[Option<T>]>,
    n: usize, // 要素に入っているスタックの要素数
}

impl<T> ArrayStack<T> {
    pub fn new() -> Self {
        Self {
            a: Self::allocate(MIN_CAPACITY),
            n: 0,
        }
    }

    fn allocate(capacity: usize) -> Box<[Option<T>]> {
        std::iter::repeat_with(|| None).take(capacity).collect()
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn capacity(&self) -> usize {
        self.a.len()
    }

    /// 一番上の値を削除せずに返す
    pub fn peek(&self) -> Option<&T> {
        self.n.checked_sub(1).and_then(|i| self.a[i].as_ref())
    }

    /// 上から順に要素を返す
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.a[..self.n].iter().rev().filter_map(Option::as_ref)
    }

    // 配列の長さを変更する
    fn resize(&mut self, capacity: usize) {
        if capacity < MIN_CAPACITY {
            return;
        }
        debug!(
            "resizing array stack from {} to {} (len {})",
            self.a.len(),
            capacity,
            self.n
        );
        let mut b = Self::allocate(capacity);
        for (dst, src) in b.iter_mut().zip(self.a[..self.n].iter_mut()) {
            *dst = src.take();
        }
        self.a = b;
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn push(&mut self, x: T) {
        if self.n >= self.a.len() {
            self.resize(2 * self.a.len());
        }
        self.a[self.n] = Some(x);
        self.n += 1;
    }

    fn pop(&mut self) -> Option<T> {
        if self.n == 0 {
            return None;
        }
        self.n -= 1;
        let x = self.a[self.n].take();
        // 配列の長さに対して要素が少なすぎる場合はresizeする
        if self.n <= self.a.len() / 4 {
            self.resize(self.a.len() / 2);
        }
        x
    }
}
