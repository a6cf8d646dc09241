use std::fmt::Display;

/// 要素を", "で区切り"[]"で囲んだ文字列にする
pub fn format_iter<I>(iter: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let items: Vec<String> = iter.into_iter().map(|x| x.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// 反復可能な値を一行で出力する
pub fn iter_print<I>(iter: I)
where
    I: IntoIterator,
    I::Item: Display,
{
    println!("{}", format_iter(iter));
}

/// 配列を一行で出力する
pub fn array_print<T: Display>(a: &[T]) {
    iter_print(a);
}
