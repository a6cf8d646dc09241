use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::{cell::RefCell, rc::Rc};

use crate::interface::queue::Queue;

type Link<T> = Option<Rc<RefCell<Node<T>>>>;

struct Node<T> {
    x: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new(x: T) -> Self {
        Self { x, next: None }
    }
}

/// 単方向連結リストによるQueue
///
/// headから削除し、tailの後ろに追加する
/// 末尾を辿らずに追加できるようにtailへの参照を持っておく
/// enqueue(x), dequeue()の実行時間はいずれもO(1)
pub struct SLQueue<T> {
    head: Link<T>,
    tail: Link<T>,
    n: usize,
}

impl<T> SLQueue<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            n: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}

impl<T: Clone> SLQueue<T> {
    /// 次にdequeueされる値の複製を返す
    pub fn peek(&self) -> Option<T> {
        self.head.as_ref().map(|rc| rc.borrow().x.clone())
    }

    /// 先頭から順に値の複製を返す
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.clone(),
            _queue: PhantomData,
        }
    }
}

impl<T> Default for SLQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> for SLQueue<T> {
    fn enqueue(&mut self, x: T) {
        let node = Rc::new(RefCell::new(Node::new(x)));
        match self.tail.take() {
            Some(tail) => {
                tail.borrow_mut().next = Some(Rc::clone(&node));
            }
            None => {
                self.head = Some(Rc::clone(&node));
            }
        }
        self.tail = Some(node);
        self.n += 1;
    }

    fn dequeue(&mut self) -> Option<T> {
        let target = self.head.take()?;
        self.head = target.borrow_mut().next.take();
        self.n -= 1;
        if self.head.is_none() {
            // 最後のノードはtailからも参照されている
            self.tail = None;
        }
        Rc::try_unwrap(target)
            .ok()
            .map(|cell| cell.into_inner().x)
    }
}

impl<T> Drop for SLQueue<T> {
    fn drop(&mut self) {
        self.tail = None;
        let mut cur = self.head.take();
        while let Some(rc) = cur {
            cur = rc.borrow_mut().next.take();
        }
    }
}

impl<T: Debug> Debug for SLQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "head")?;
        let mut cur = self.head.clone();
        while let Some(rc) = cur {
            let node = rc.borrow();
            write!(f, " -> {:?}", node.x)?;
            cur = node.next.clone();
        }
        Ok(())
    }
}

/// ノードを共有参照で辿るカーソル
///
/// 走査中はキューを借用しているので、dequeueでノードを取り出すことはできない
pub struct Iter<'a, T> {
    next: Link<T>,
    _queue: PhantomData<&'a SLQueue<T>>,
}

impl<'a, T: Clone> Iterator for Iter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let rc = self.next.take()?;
        let node = rc.borrow();
        self.next = node.next.clone();
        let x = node.x.clone();
        Some(x)
    }
}
