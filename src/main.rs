use anyhow::{bail, Context, Result};
use yearmonth::{init_tracing_once, YearMonth};

fn main() -> Result<()> {
    init_tracing_once();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (start, end) = match args.as_slice() {
        [start, end] => (start, end),
        _ => bail!("usage: yearmonth START END   (both YYYY-MM, inclusive)"),
    };

    let start: YearMonth = start.parse().with_context(|| format!("start month {:?}", start))?;
    let end: YearMonth = end.parse().with_context(|| format!("end month {:?}", end))?;
    tracing::debug!(%start, %end, span = end.diff(&start) + 1, "listing months");

    let mut n = 0u64;
    for ym in start.iter_to(&end) {
        println!("{}", ym);
        n += 1;
    }
    eprintln!("{} months", n);

    Ok(())
}
