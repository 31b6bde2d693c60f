//! Translates an `n`-bit counter and prints the resulting transition system.
//!
//! ```bash
//! cargo run --example counter -- --bits 4
//! ```

use clap::Parser;

use aig_transys::aiger::Aig;
use aig_transys::cnf::Cnf;
use aig_transys::config::{ResetPolicy, TranslateConfig};
use aig_transys::transys::TransitionSystem;

#[derive(Parser, Debug)]
#[command(about = "Translate a synthetic counter AIG into a transition system")]
struct Cli {
    /// Counter width.
    #[arg(short, long, default_value_t = 3)]
    bits: u32,

    /// Expose the all-ones signal as an output instead of a bad literal.
    #[arg(long)]
    as_output: bool,

    /// Do not reinterpret outputs as bad-state properties.
    #[arg(long)]
    no_outputs_as_bad: bool,

    /// Leave latches with non-constant reset uninitialized instead of failing.
    #[arg(long)]
    allow_uninitialized: bool,

    /// Also print the one-step CNF in DIMACS format.
    #[arg(long)]
    dimacs: bool,

    /// Log level.
    #[arg(long, default_value = "info")]
    log: simplelog::LevelFilter,
}

/// Counter with enable input `en`; the last literal is "all bits set".
fn counter(bits: u32, as_output: bool) -> Aig {
    let first_and = bits + 2;
    let max_var = first_and + 3 * bits + bits.saturating_sub(1) - 1;
    let mut aig = Aig::new(max_var);
    aig.add_named_input(2, "en");

    let mut node = first_and;
    let mut carry = 2;
    let mut ands = Vec::new();
    for k in 0..bits {
        let b = 2 * (2 + k);
        let both = 2 * node;
        let neither = 2 * (node + 1);
        let xor = 2 * (node + 2);
        ands.push((both, b, carry));
        ands.push((neither, b ^ 1, carry ^ 1));
        ands.push((xor, both ^ 1, neither ^ 1));
        aig.add_named_latch(b, xor, 0, &format!("b{}", k));
        carry = both;
        node += 3;
    }

    let mut all = 2 * 2;
    for k in 1..bits {
        ands.push((2 * node, all, 2 * (2 + k)));
        all = 2 * node;
        node += 1;
    }

    for (lhs, rhs0, rhs1) in ands {
        aig.add_and(lhs, rhs0, rhs1);
    }
    if as_output {
        aig.add_output(all);
    } else {
        aig.add_bad(all);
    }
    aig
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    simplelog::TermLogger::init(
        cli.log,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let aig = counter(cli.bits.max(1), cli.as_output);
    let config = TranslateConfig {
        outputs_as_bad: !cli.no_outputs_as_bad,
        reset_policy: if cli.allow_uninitialized {
            ResetPolicy::Unconstrained
        } else {
            ResetPolicy::Reject
        },
    };
    let ts = TransitionSystem::from_aig(&aig, &config)?;

    println!("inputs:");
    for input in ts.inputs().iter() {
        println!("- {} ({})", input.var, input.name.as_deref().unwrap_or("?"));
    }
    println!("latches:");
    for (cur, next) in ts.latches().iter().zip(ts.next_states().iter()) {
        println!(
            "- {} / {} ({} / {})",
            cur.var,
            next.var,
            cur.name.as_deref().unwrap_or("?"),
            next.name.as_deref().unwrap_or("?"),
        );
    }
    println!("init:");
    for &e in ts.init() {
        println!("- {}", ts.expr(e));
    }
    println!("trans:");
    for &e in ts.trans() {
        println!("- {}", ts.expr(e));
    }
    println!("bad:");
    for p in ts.bad() {
        println!("- {:?}: {}", p.origin, ts.expr(p.expr));
    }
    for d in ts.diagnostics() {
        println!("note: {}", d);
    }
    println!("stats: {}", ts.stats());

    if cli.dimacs {
        let mut cnf = Cnf::new();
        let roots: Vec<_> = ts.init().iter().chain(ts.trans()).copied().collect();
        for lit in ts.pool().lower(&mut cnf, &roots) {
            cnf.assert_lit(lit);
        }
        print!("{}", cnf.to_dimacs());
    }

    let time_total = time_total.elapsed();
    println!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
