// 挿入ソート
// Θ(n^2)、ほぼ整列済みの入力ではΘ(n)
// 左隣の方が小さくなった時点でその要素の挿入をやめる
pub fn insertion_sort<T: Ord>(list: &mut [T]) {
    for j in 1..list.len() {
        let mut i = j;
        while i > 0 && list[i] < list[i - 1] {
            list.swap(i, i - 1);
            i -= 1;
        }
    }
}
