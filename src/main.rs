//! Flatbed - Zero-Copy Table Buffer Encoding Engine
//!
//! Demo + micro-benchmark:
//! - Build: TableInC → TableInFirstNS → TableInNestedNS graph
//! - Read: lazy field access, tanpa decode buffer penuh
//! - Mutate: overwrite scalar in-place
//! - Verify: structural walk untuk buffer tidak dipercaya

use std::hint::black_box;
use std::time::Instant;

use flatbed::logging::init_tracing;
use flatbed::namespace_a::namespace_b::{EnumInNestedNS, StructInNestedNS, TableInNestedNS, TableInNestedNSArgs};
use flatbed::namespace_a::{
    root_as_table_in_first_ns_mut, root_as_table_in_first_ns_unverified, SecondTableInA,
    SecondTableInAArgs, TableInFirstNS, TableInFirstNSArgs,
};
use flatbed::namespace_c::{root_as_table_in_c, TableInC, TableInCArgs};
use flatbed::{BuildResult, Builder, BuilderConfig};
use tracing::{error, info};

/// Demo configuration
struct DemoConfig {
    iterations: usize,
    verbose: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            verbose: false,
        }
    }
}

fn main() {
    let config = parse_args();
    let filter = if config.verbose { "debug" } else { "info" };
    if let Err(e) = init_tracing(filter) {
        eprintln!("failed to install tracing subscriber: {}", e);
    }

    println!("🚀 Flatbed - Zero-Copy Table Buffers");
    println!("====================================\n");

    if let Err(e) = run(&config) {
        error!(error = %e, "demo failed");
        std::process::exit(1);
    }

    println!("\n✅ All benchmarks complete!");
}

fn run(config: &DemoConfig) -> Result<(), Box<dyn std::error::Error>> {
    let sample = build_graph(&mut Builder::new(), 42)?;
    info!(size = sample.len(), "sample buffer built");

    show_sample(&sample)?;
    benchmark_build(config.iterations)?;
    benchmark_read(&sample, config.iterations)?;
    benchmark_mutate(config.iterations)?;
    benchmark_verify(&sample, config.iterations / 10)?;
    Ok(())
}

/// TableInC { a1: TableInFirstNS { nested, B, struct }, a2: SecondTableInA {} }
fn build_graph(fbb: &mut Builder, foo: i32) -> BuildResult<Vec<u8>> {
    fbb.reset();
    let nested = TableInNestedNS::create(fbb, &TableInNestedNSArgs { foo })?;
    let first = TableInFirstNS::create(
        fbb,
        &TableInFirstNSArgs {
            foo_table: Some(nested),
            foo_enum: EnumInNestedNS::B,
            foo_struct: Some(StructInNestedNS::new(foo, -foo)),
        },
    )?;
    let second = SecondTableInA::create(fbb, &SecondTableInAArgs { refer_to_c: None })?;
    let root = TableInC::create(
        fbb,
        &TableInCArgs {
            refer_to_a1: Some(first),
            refer_to_a2: Some(second),
        },
    )?;
    fbb.finish(root, None)?;
    Ok(fbb.finished_data()?.to_vec())
}

fn show_sample(buf: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    println!("📦 Sample Buffer ({} bytes)", buf.len());
    println!("---------------------------");

    let root = root_as_table_in_c(buf)?;
    if let Some(a1) = root.refer_to_a1()? {
        println!("  foo_enum:   {}", a1.foo_enum()?.variant_name());
        if let Some(s) = a1.foo_struct()? {
            println!("  foo_struct: a={} b={}", s.a(), s.b());
        }
        if let Some(t) = a1.foo_table()? {
            println!("  foo_table:  foo={}", t.foo()?);
        }
    }
    println!(
        "  refer_to_a2.refer_to_c present: {}\n",
        root.refer_to_a2()?
            .map(|a2| a2.refer_to_c().map(|c| c.is_some()))
            .transpose()?
            .unwrap_or(false)
    );
    Ok(())
}

fn benchmark_build(iterations: usize) -> BuildResult<()> {
    println!("📊 Build Benchmark (4 tables + struct, reused builder)");
    println!("------------------------------------------------------");

    let mut fbb = Builder::with_config(BuilderConfig::default().with_capacity(256));

    // Warm up
    for i in 0..1000 {
        black_box(build_graph(&mut fbb, i)?);
    }

    let start = Instant::now();
    for i in 0..iterations {
        black_box(build_graph(&mut fbb, i as i32)?);
    }
    let duration = start.elapsed();

    let ns = duration.as_nanos() as f64 / iterations as f64;
    println!("  Operations: {}", iterations);
    println!("  Build latency: {:.2} ns/op ({:.3} μs/op)", ns, ns / 1000.0);
    println!(
        "  Throughput:    {:.2} M buffers/sec",
        iterations as f64 / duration.as_secs_f64() / 1_000_000.0
    );
    println!("  Vtables written per buffer: {}\n", fbb.vtable_count());
    Ok(())
}

fn benchmark_read(buf: &[u8], iterations: usize) -> Result<(), Box<dyn std::error::Error>> {
    println!("📊 Read Benchmark (lazy, 3 levels deep)");
    println!("---------------------------------------");

    let start = Instant::now();
    let mut sum = 0i64;
    for _ in 0..iterations {
        let root = flatbed::namespace_c::root_as_table_in_c_unverified(black_box(buf))?;
        if let Some(a1) = root.refer_to_a1()? {
            if let Some(t) = a1.foo_table()? {
                sum += t.foo()? as i64;
            }
        }
    }
    let duration = start.elapsed();
    black_box(sum);

    let ns = duration.as_nanos() as f64 / iterations as f64;
    println!("  Operations: {}", iterations);
    println!("  Read latency: {:.2} ns/op ({:.3} μs/op)\n", ns, ns / 1000.0);
    Ok(())
}

fn benchmark_mutate(iterations: usize) -> Result<(), Box<dyn std::error::Error>> {
    println!("📊 Mutate Benchmark (in-place scalar overwrite)");
    println!("-----------------------------------------------");

    // TableInFirstNS sebagai root supaya mutasi langsung di level pertama
    let mut fbb = Builder::new();
    let first = TableInFirstNS::create(
        &mut fbb,
        &TableInFirstNSArgs {
            foo_table: None,
            foo_enum: EnumInNestedNS::C,
            foo_struct: Some(StructInNestedNS::new(1, 2)),
        },
    )?;
    fbb.finish(first, None)?;
    let mut buf = fbb.finished_data()?.to_vec();

    let start = Instant::now();
    let mut table = root_as_table_in_first_ns_mut(&mut buf)?;
    for i in 0..iterations {
        table.mutate_foo_struct_a(black_box(i as i32))?;
    }
    let duration = start.elapsed();

    let value = root_as_table_in_first_ns_unverified(&buf)?
        .foo_struct()?
        .map(|s| s.a());
    let ns = duration.as_nanos() as f64 / iterations as f64;
    println!("  Operations: {}", iterations);
    println!("  Mutate latency: {:.2} ns/op ({:.3} μs/op)", ns, ns / 1000.0);
    println!("  Final foo_struct.a: {:?}\n", value);
    Ok(())
}

fn benchmark_verify(buf: &[u8], iterations: usize) -> Result<(), Box<dyn std::error::Error>> {
    println!("📊 Verify Benchmark (full structural walk)");
    println!("------------------------------------------");

    let iterations = iterations.max(1);
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(root_as_table_in_c(black_box(buf))?);
    }
    let duration = start.elapsed();

    let ns = duration.as_nanos() as f64 / iterations as f64;
    println!("  Operations: {}", iterations);
    println!("  Verify latency: {:.2} ns/op ({:.3} μs/op)", ns, ns / 1000.0);
    println!(
        "  Verify throughput: {:.2} MB/sec",
        (iterations * buf.len()) as f64 / duration.as_secs_f64() / 1_000_000.0
    );
    Ok(())
}

fn parse_args() -> DemoConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = DemoConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--iterations" | "-n" => {
                if i + 1 < args.len() {
                    config.iterations = args[i + 1].parse().unwrap_or(1_000_000);
                    i += 1;
                }
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--help" | "-h" => {
                println!("Flatbed - Zero-Copy Table Buffer benchmark demo\n");
                println!("Usage: flatbed [OPTIONS]\n");
                println!("Options:");
                println!("  -n, --iterations <N>  Operations per benchmark (default: 1000000)");
                println!("  -v, --verbose         Debug logging");
                println!("  -h, --help            Show this help");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config.iterations = config.iterations.max(1);
    config
}
