use log::trace;

use crate::data_structure::sl_stack::SLStack;
use crate::interface::{queue::Queue, stack::Stack};

/// 2つのStackで作るQueue
///
/// enqueueはinboxにpushするだけ
/// dequeueのときoutboxが空であればinboxの要素を全てoutboxに移す
/// Stackからpopした順にpushし直すと順序が逆になるので、outboxの一番上が最も古い値になる
///
/// 各要素はinboxとoutboxに1回ずつしか出入りしないので、dequeueは償却O(1)
#[derive(Debug, Default)]
pub struct DualStackQueue<T> {
    inbox: SLStack<T>,
    outbox: SLStack<T>,
}

impl<T> DualStackQueue<T> {
    pub fn new() -> Self {
        Self {
            inbox: SLStack::new(),
            outbox: SLStack::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inbox.len() + self.outbox.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inbox.is_empty() && self.outbox.is_empty()
    }

    /// 先頭から順に要素を返す
    ///
    /// outboxを上から、続けてinboxを下から辿る
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let rest: Vec<&T> = self.inbox.iter().collect();
        self.outbox.iter().chain(rest.into_iter().rev())
    }

    // inboxの要素を全てoutboxに移す
    fn refill(&mut self) {
        trace!("moving {} element(s) to the outbox", self.inbox.len());
        while let Some(x) = self.inbox.pop() {
            self.outbox.push(x);
        }
    }
}

impl<T> Queue<T> for DualStackQueue<T> {
    fn enqueue(&mut self, x: T) {
        self.inbox.push(x);
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.outbox.is_empty() {
            if self.inbox.is_empty() {
                return None;
            }
            self.refill();
        }
        self.outbox.pop()
    }
}
