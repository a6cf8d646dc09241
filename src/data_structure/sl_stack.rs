use std::fmt::{self, Debug};

use crate::interface::stack::Stack;

struct Node<T> {
    x: T,
    next: Option<Box<Node<T>>>,
}

/// 単方向連結リストによるStack
///
/// 先頭ノードがStackの一番上になる
/// push(x), pop()の実行時間は最悪でもO(1)
/// 配列による実装と比べるとノードごとに割り当てが発生する
pub struct SLStack<T> {
    head: Option<Box<Node<T>>>,
    n: usize,
}

impl<T> SLStack<T> {
    pub fn new() -> Self {
        Self { head: None, n: 0 }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.x)
    }

    /// 上から順に要素を返す
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for SLStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> for SLStack<T> {
    fn push(&mut self, x: T) {
        let node = Box::new(Node {
            x,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.n += 1;
    }

    fn pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.n -= 1;
            node.x
        })
    }
}

// 長いリストで再帰的なdropがスタックを溢れさせないようにループで解放する
impl<T> Drop for SLStack<T> {
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T: Debug> Debug for SLStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "head")?;
        for x in self.iter() {
            write!(f, " -> {:?}", x)?;
        }
        Ok(())
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.x
        })
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stack() {
        let mut list = SLStack::new();
        for x in "abcde".chars() {
            list.push(x);
        }
        assert_eq!(list.n, 5);
        assert_eq!(list.iter().collect::<String>(), "edcba");

        list.push('y');
        assert_eq!(list.n, 6);
        assert_eq!(list.peek(), Some(&'y'));

        assert_eq!(list.pop(), Some('y'));
        assert_eq!(list.n, 5);
        assert_eq!(format!("{:?}", list), "head -> 'e' -> 'd' -> 'c' -> 'b' -> 'a'");

        while list.pop().is_some() {}
        assert!(list.is_empty());
        assert_eq!(list.pop(), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_drop_long_list() {
        let mut list = SLStack::new();
        for i in 0..200_000 {
            list.push(i);
        }
        drop(list);
    }
}
