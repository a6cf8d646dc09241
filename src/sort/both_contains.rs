use std::cmp::Ordering;

use crate::sort::shell_sort::shell_sort;

/// 2つの配列の両方に含まれる要素の数を数える
///
/// それぞれの配列の中では値が重複していないものとする
/// 両方をソートしてから先頭に1つずつ添字を置き、小さい方の添字を進めていく
/// 同じ値を指したら数えて両方進める
/// ソートがO(n lg n)、走査がO(n)
pub fn count_both<T: Ord>(a: &mut [T], b: &mut [T]) -> usize {
    shell_sort(a);
    shell_sort(b);

    let mut count = 0;
    let mut i = 0;
    let mut j = 0;
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
        }
    }
    count
}

/// 全ての組を比較して数える。Θ(n^2)
pub fn count_both_quadratic<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter()
        .map(|x| b.iter().filter(|y| x == *y).count())
        .sum()
}
