use std::{
    cmp::Ordering,
    fmt::{self, Display},
};

use clap::{Parser, Subcommand, ValueEnum};
use classic_algorithms::{
    data_structure::{
        array_stack::ArrayStack, dual_stack_queue::DualStackQueue, dynamic_array::DynamicArray,
        sl_queue::SLQueue, sl_stack::SLStack,
    },
    helper::DynError,
    interface::{list::List, queue::Queue, stack::Stack},
    sort,
    util::{
        out_util::{array_print, iter_print},
        rand_util::{rand_f64_vec, unique_rand_int_vec},
    },
};
use log::{info, LevelFilter};
use rand::{rngs::StdRng, thread_rng, RngCore, SeedableRng};

/// 各アルゴリズムとデータ構造のデモ
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// debugログを出力する
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 乱数の配列をソートする
    Sort {
        #[arg(short, long, value_enum, default_value_t = Algorithm::Merge)]
        algorithm: Algorithm,
        #[arg(short, long, default_value_t = 10)]
        len: usize,
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// 0..lenをシャッフルする
    Shuffle {
        #[arg(short, long, default_value_t = 10)]
        len: usize,
        #[arg(short, long)]
        seed: Option<u64>,
    },
    DynamicArray,
    ArrayStack,
    LinkedStack,
    LinkedQueue,
    TwoStackQueue,
    /// count_bothとcount_both_quadraticの結果を突き合わせる
    BothContains {
        #[arg(short, long, default_value_t = 100_000)]
        rounds: usize,
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    Merge,
    Insertion,
    Selection,
    Shell,
}

// [0, 1)の乱数は全順序で比較する
#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample(f64);

impl Eq for Sample {}

impl PartialOrd for Sample {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sample {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

fn setup_logs(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_module("classic_algorithms", level);
    if let Ok(filters) = std::env::var("CLASSIC_ALGORITHMS_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn make_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(thread_rng()),
    }
}

fn sort_demo(algorithm: Algorithm, len: usize, seed: Option<u64>) {
    let mut rng = make_rng(seed);
    let mut array: Vec<Sample> = rand_f64_vec(&mut rng, len).into_iter().map(Sample).collect();

    println!("Before sort");
    array_print(&array);

    info!("sorting {} element(s) with {:?}", array.len(), algorithm);
    match algorithm {
        Algorithm::Merge => sort::merge_sort(&mut array),
        Algorithm::Insertion => sort::insertion_sort(&mut array),
        Algorithm::Selection => sort::selection_sort(&mut array),
        Algorithm::Shell => sort::shell_sort(&mut array),
    }

    println!("After sort");
    array_print(&array);
}

fn shuffle_demo(len: usize, seed: Option<u64>) {
    let mut rng = make_rng(seed);
    let mut array: Vec<usize> = (0..len).collect();
    sort::knuth_shuffle(&mut array, &mut rng);
    array_print(&array);
}

fn dynamic_array_demo() -> Result<(), DynError> {
    let mut array = DynamicArray::new();
    array.append(1);
    println!("{}", array.get(0)?);

    println!("Retrieving at invalid index!");
    if let Err(e) = array.get(1) {
        println!("{}", e);
    }

    println!("Removing at invalid index!");
    if let Err(e) = array.remove_at(1) {
        println!("{}", e);
    }

    array.remove_at(0)?;
    println!("Retrieving at invalid index that used to be valid!");
    if let Err(e) = array.get(0) {
        println!("{}", e);
    }
    println!("Size of array: {}", array.size());

    for i in 0..5 {
        array.append(i);
    }
    iter_print(&array);
    for i in 0..array.size() {
        println!("{}", array.get(i)?);
    }
    Ok(())
}

fn stack_demo<S: Stack<String>>(stack: &mut S, print: impl Fn(&S)) {
    for i in 0..5 {
        stack.push(i.to_string());
    }
    print(stack);
    while let Some(x) = stack.pop() {
        println!("{}", x);
    }
    println!();

    for i in 0..5 {
        stack.push(i.to_string());
        if let Some(x) = stack.pop() {
            println!("{}", x);
        }
    }
}

fn queue_demo<Q: Queue<i32>>(new: impl Fn() -> Q, print: impl Fn(&Q)) {
    let mut queue = new();
    for i in 0..10 {
        queue.enqueue(i);
    }
    for _ in 0..10 {
        println!("{:?}", queue.dequeue());
    }

    println!();
    println!("Test iterator");
    for i in 0..10 {
        queue.enqueue(i);
    }
    print(&queue);

    let mut queue = new();
    println!();
    println!("Repeatedly enqueue and dequeue");
    for i in 0..10 {
        queue.enqueue(i);
        println!("{:?}", queue.dequeue());
    }

    println!();
    println!("Empty");
    println!("{:?}", queue.dequeue());
}

fn both_contains_demo(rounds: usize, seed: Option<u64>) -> Result<(), DynError> {
    let mut rng = make_rng(seed);
    for round in 0..rounds {
        let mut a = unique_rand_int_vec(&mut rng, 10, 0, 15)?;
        let mut b = unique_rand_int_vec(&mut rng, 10, 0, 15)?;
        let expected = sort::count_both_quadratic(&a, &b);
        let actual = sort::count_both(&mut a, &mut b);
        if actual != expected {
            return Err(format!(
                "round {}: count_both returned {}, expected {}",
                round, actual, expected
            )
            .into());
        }
    }
    info!("count_both agreed with count_both_quadratic over {} round(s)", rounds);
    Ok(())
}

fn main() -> Result<(), DynError> {
    let args = Args::parse();
    setup_logs(args.verbose);

    match args.command {
        Command::Sort {
            algorithm,
            len,
            seed,
        } => sort_demo(algorithm, len, seed),
        Command::Shuffle { len, seed } => shuffle_demo(len, seed),
        Command::DynamicArray => dynamic_array_demo()?,
        Command::ArrayStack => stack_demo(&mut ArrayStack::new(), |s: &ArrayStack<String>| {
            iter_print(s.iter())
        }),
        Command::LinkedStack => stack_demo(&mut SLStack::new(), |s: &SLStack<String>| {
            iter_print(s.iter())
        }),
        Command::LinkedQueue => queue_demo(SLQueue::new, |q: &SLQueue<i32>| iter_print(q.iter())),
        Command::TwoStackQueue => queue_demo(DualStackQueue::new, |q: &DualStackQueue<i32>| {
            iter_print(q.iter())
        }),
        Command::BothContains { rounds, seed } => both_contains_demo(rounds, seed)?,
    }

    Ok(())
}
