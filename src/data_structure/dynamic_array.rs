use std::fmt;

use log::debug;

use crate::error::{Error, Result};
use crate::interface::list::List;

/// 配列の長さの下限
const MIN_CAPACITY: usize = 4;

/// 可変長配列(DynamicArray)
///
/// 配列が満杯の状態でappend(x)すると長さを2倍にし、
/// 要素数が長さの1/4になった時点で長さを半分にする
/// 1/2で縮めると満杯付近でappendとremove_atを繰り返したときに
/// resizeが毎回走ってしまうため、1/4まで待つ
///
/// resize()のコストを無視するとget(i)はO(1)、append(x)はO(1)、remove_at(i)はO(n-i)
/// 空の配列に対する任意のm個のappend, remove_atの列でresizeにかかる時間はO(m)
pub struct DynamicArray<T> {
    a: Box<[Option<T>]>,
    n: usize, // 要素数
}

impl<T> DynamicArray<T> {
    pub fn new() -> Self {
        Self {
            a: Self::allocate(MIN_CAPACITY),
            n: 0,
        }
    }

    fn allocate(capacity: usize) -> Box<[Option<T>]> {
        std::iter::repeat_with(|| None).take(capacity).collect()
    }

    /// 内部配列の長さ
    pub fn capacity(&self) -> usize {
        self.a.len()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { array: self, i: 0 }
    }

    // 配列の長さをcapacityに変更する
    // 下限より小さくはしない
    fn resize(&mut self, capacity: usize) {
        if capacity < MIN_CAPACITY {
            return;
        }
        debug!(
            "resizing dynamic array from {} to {} (size {})",
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

    fn out_of_range(&self, i: usize) -> Error {
        Error::IndexOutOfRange {
            index: i,
            size: self.n,
        }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> for DynamicArray<T> {
    fn size(&self) -> usize {
        self.n
    }

    fn get(&self, i: usize) -> Result<&T> {
        if i >= self.n {
            return Err(self.out_of_range(i));
        }
        self.a[i].as_ref().ok_or_else(|| self.out_of_range(i))
    }

    fn append(&mut self, x: T) {
        if self.n == self.a.len() {
            self.resize(2 * self.a.len());
        }
        self.a[self.n] = Some(x);
        self.n += 1;
    }

    fn remove_at(&mut self, i: usize) -> Result<T> {
        if i >= self.n {
            return Err(self.out_of_range(i));
        }
        let x = self.a[i].take();
        // a[i+1],...,a[n-1]を左に1つずらす
        // 空いたa[i]は末尾a[n-1]に移る
        self.a[i..self.n].rotate_left(1);
        self.n -= 1;

        if self.n == self.a.len() / 4 {
            self.resize(self.a.len() / 2);
        }
        x.ok_or_else(|| self.out_of_range(i))
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// 先頭から順に要素を返すカーソル
///
/// 配列を借用しているので、走査中に配列を変更することはできない
pub struct Iter<'a, T> {
    array: &'a DynamicArray<T>,
    i: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.array.get(self.i).ok()?;
        self.i += 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.array.n.saturating_sub(self.i);
        (rest, Some(rest))
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list() {
        let mut array = DynamicArray::new();
        array.append(10);
        array.append(20);
        array.append(30);
        assert_eq!(array.a, vec![Some(10), Some(20), Some(30), None].into_boxed_slice());
        assert_eq!(array.n, 3);

        assert_eq!(array.remove_at(0), Ok(10));
        assert_eq!(array.a, vec![Some(20), Some(30), None, None].into_boxed_slice());
        assert_eq!(array.get(0), Ok(&20));
        assert_eq!(array.get(1), Ok(&30));
        assert_eq!(array.size(), 2);
    }

    #[test]
    fn test_out_of_range() {
        let mut array = DynamicArray::new();
        assert_eq!(
            array.get(0),
            Err(Error::IndexOutOfRange { index: 0, size: 0 })
        );

        array.append('a');
        assert_eq!(
            array.get(1),
            Err(Error::IndexOutOfRange { index: 1, size: 1 })
        );
        assert_eq!(
            array.remove_at(1),
            Err(Error::IndexOutOfRange { index: 1, size: 1 })
        );
        assert_eq!(array.size(), 1);

        assert_eq!(array.remove_at(0), Ok('a'));
        assert_eq!(
            array.get(0),
            Err(Error::IndexOutOfRange { index: 0, size: 0 })
        );
        assert!(array.is_empty());
    }

    #[test]
    fn test_resize() {
        let mut array = DynamicArray::new();
        assert_eq!(array.capacity(), 4);

        for x in 1..=17 {
            array.append(x);
            let expected = match x {
                1..=4 => 4,
                5..=8 => 8,
                9..=16 => 16,
                _ => 32,
            };
            assert_eq!(array.capacity(), expected);
        }
        for i in 0..17 {
            assert_eq!(array.get(i), Ok(&(i as i32 + 1)));
        }

        let mut capacities = vec![];
        while !array.is_empty() {
            array.remove_at(0).unwrap();
            capacities.push((array.size(), array.capacity()));
        }
        assert_eq!(array.size(), 0);
        assert_eq!(capacities[16 - 8], (8, 16));
        assert_eq!(capacities[16 - 4], (4, 8));
        assert_eq!(capacities[16 - 2], (2, 4));
        assert_eq!(capacities[16 - 1], (1, 4));
        assert_eq!(capacities[16], (0, 4));
    }

    #[test]
    fn test_remove_clears_slot() {
        let mut array = DynamicArray::new();
        for x in "abcd".chars() {
            array.append(x.to_string());
        }
        assert_eq!(array.remove_at(1), Ok("b".to_string()));
        assert_eq!(array.n, 3);
        assert_eq!(array.a[3], None);
        assert_eq!(
            array.iter().cloned().collect::<Vec<_>>(),
            vec!["a", "c", "d"]
        );
    }

    #[test]
    fn test_iter() {
        let mut array = DynamicArray::new();
        for x in 0..5 {
            array.append(x);
        }
        assert_eq!(array.iter().size_hint(), (5, Some(5)));
        assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);

        // 何度でも先頭から走査し直せる
        let mut sum = 0;
        for x in &array {
            sum += x;
        }
        assert_eq!(sum, 10);
        assert_eq!(format!("{:?}", array), "[0, 1, 2, 3, 4]");
    }

    quickcheck::quickcheck! {
        fn qc_matches_vec(ops: Vec<(bool, u8)>) -> bool {
            let mut array = DynamicArray::new();
            let mut model: Vec<u8> = vec![];

            for (is_append, x) in ops {
                if is_append || model.is_empty() {
                    array.append(x);
                    model.push(x);
                } else {
                    let i = x as usize % model.len();
                    if array.remove_at(i) != Ok(model.remove(i)) {
                        return false;
                    }
                }

                let cap = array.capacity();
                if array.size() != model.len() || cap < 4 || array.size() > cap {
                    return false;
                }
                if cap > 4 && array.size() <= cap / 4 {
                    return false;
                }
            }
            array.iter().eq(model.iter())
        }
    }
}
