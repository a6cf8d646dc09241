// 選択ソート
// 未整列部分の最小値を探して先頭と交換する
// 入力によらずΘ(n^2)の比較を行うが、交換はn回で済む
// 安定ではない
pub fn selection_sort<T: Ord>(list: &mut [T]) {
    for i in 0..list.len() {
        let mut min = i;
        for j in i + 1..list.len() {
            if list[j] < list[min] {
                min = j;
            }
        }
        list.swap(i, min);
    }
}

#[cfg(test)]
mod tests {
    use super::selection_sort;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_selection_sort() {
        let mut input = vec!['d', 'a', 'c', 'b', 'a'];
        selection_sort(&mut input);
        assert_eq!(input, vec!['a', 'a', 'b', 'c', 'd']);
    }

    quickcheck::quickcheck! {
        fn qc_sorted(values: Vec<i32>) -> bool {
            let mut actual = values.clone();
            selection_sort(&mut actual);
            let mut expected = values;
            expected.sort();
            actual == expected
        }
    }
}
