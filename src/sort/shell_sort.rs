/// シェルソート
///
/// 間隔hだけ離れた要素同士で挿入ソートを行い、hを小さくしながら繰り返す
/// hが大きいうちは部分列が短く、hが小さくなる頃にはほぼ整列済みなので挿入ソートが速い
/// 間隔の列は h = 3h + 1 (1, 4, 13, 40, 121, ...)
/// 安定ではない
pub fn shell_sort<T: Ord>(list: &mut [T]) {
    let n = list.len();
    let mut h = 1;
    while h < n / 3 {
        h = 3 * h + 1;
    }

    while h >= 1 {
        for i in h..n {
            let mut j = i;
            while j >= h && list[j] < list[j - h] {
                list.swap(j, j - h);
                j -= h;
            }
        }
        h /= 3;
    }
}
