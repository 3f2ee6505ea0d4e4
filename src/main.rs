use itertools::Itertools;
use seqpipe::{Seq, SeqRes};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// 对固定整数序列逐一调用各个序列操作，打印每个结果。
fn run() -> SeqRes<()> {
    let data = [1, 2, 3, 4, 5];

    let aggregate = Seq::of(data).aggregate(|a, b| a * b)?;
    println!("Aggregate: {aggregate}");

    println!("All: {}", Seq::of(data).all(|x| *x > 0));

    println!("Any: {}", Seq::of(data).any(|x| *x > 5));

    println!("Append: {}", Seq::of(data).append(6).join(", "));

    println!("Average: {}", Seq::of(data).average()?);

    println!("Concat: {}", Seq::of(data).concat([6, 7, 8]).join(", "));

    println!("Contains: {}", Seq::of(data).contains(&3));

    println!("Count: {}", Seq::of(data).count());

    println!("DefaultIfEmpty: {}", Seq::of(Vec::<i32>::new()).default_if_empty().join(", "));

    println!("Distinct: {}", Seq::of([1, 2, 2, 3, 3, 3]).distinct().join(", "));

    println!("ElementAt: {}", Seq::of(data).element_at(2)?);

    println!("ElementAtOrDefault: {}", Seq::of(data).element_at_or_default(5));

    println!("Except: {}", Seq::of(data).except([1, 2]).join(", "));

    println!("First: {}", Seq::of(data).first()?);

    println!("FirstOrDefault: {}", Seq::of(data).first_by_or_default(|x| *x > 5));

    for group in Seq::of(data).group_by(|x| x % 2 == 0) {
        println!("GroupBy (Even: {}): {}", group.key(), group.items().iter().join(", "));
    }

    println!("Intersect: {}", Seq::of(data).intersect([2, 4, 6]).join(", "));

    println!("Last: {}", Seq::of(data).last()?);

    println!("LastOrDefault: {}", Seq::of(data).last_by_or_default(|x| *x > 5));

    println!("LongCount: {}", Seq::of(data).long_count());

    println!("Max: {}", Seq::of(data).max()?);

    println!("Min: {}", Seq::of(data).min()?);

    println!("OrderBy: {}", Seq::of(data).order_by(|x| -x).join(", "));

    println!("Prepend: {}", Seq::of(data).prepend(0).join(", "));

    println!("Reverse: {}", Seq::of(data).reverse().join(", "));

    println!("Select: {}", Seq::of(data).project(|x| x * 2).join(", "));

    println!("SequenceEqual: {}", Seq::of(data).sequence_equal([1, 2, 3, 4, 5]));

    println!("Single: {}", Seq::of([1]).single()?);

    println!("Skip: {}", Seq::of(data).skip(2).join(", "));

    println!("Sum: {}", Seq::of(data).sum());

    println!("Take: {}", Seq::of(data).take(2).join(", "));

    println!("SkipLast: {}", Seq::of(data).skip_last(2).join(", "));

    println!("SkipWhile: {}", Seq::of(data).skip_while(|x| *x < 3).join(", "));

    println!("TakeLast: {}", Seq::of(data).take_last(2).join(", "));

    println!("TakeWhile: {}", Seq::of(data).take_while(|x| *x < 3).join(", "));

    println!("ThenBy: {}", Seq::of(data).order_by(|x| x % 2).then_by(|x| *x).join(", "));

    println!("ToArray: {}", Seq::of(data).to_array().iter().join(", "));

    let dictionary = Seq::of(data).to_dictionary(|x| *x, |x| x * 10)?;
    println!("ToDictionary:");
    for key in Seq::of(dictionary.keys().copied()).order_by(|k| *k) {
        println!("  {}: {}", key, dictionary[&key]);
    }

    println!("ToList: {}", Seq::of(data).to_list().iter().join(", "));

    let lookup = Seq::of(data).to_lookup(|x| x % 2);
    println!("ToLookup:");
    for group in &lookup {
        let parity = if *group.key() == 0 { "Even" } else { "Odd" };
        println!("  {}: {}", parity, group.items().iter().join(", "));
    }

    println!("Union: {}", Seq::of(data).union([6, 7, 8]).join(", "));

    println!("Where: {}", Seq::of(data).filter(|x| *x > 2).join(", "));

    println!("Zip:");
    for (a, b) in Seq::of(data).zip_with([6, 7, 8], |a, b| (a, b)) {
        println!("  ({a}, {b})");
    }

    Ok(())
}
