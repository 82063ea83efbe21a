#![allow(non_snake_case)]

use std::{ env, fs };
use anyhow::Context;
use tunneling::{ Integrator, Params };

// run a single packet against the barrier, reporting progress and the final
// split between reflected and transmitted probability
//
// usage: cargo run --release --example barrier [params.json]

// log a snapshot every this many steps
const SNAPSHOT_EVERY: usize = 100;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"))
        .init();

    let params: Params
        = match env::args().nth(1) {
            Some(path) => {
                let doc = fs::read_to_string(&path)
                    .with_context(|| format!("couldn't read {}", path))?;
                serde_json::from_str(&doc)
                    .with_context(|| format!("couldn't parse {}", path))?
            },
            None => Params::default(),
        };
    log::info!("{:?}", params);

    let mut sim = Integrator::new(params)?;
    let nt = sim.time_steps();
    log::info!(
        "grid: {} points, {} time steps, barrier at [{:.3e}, {:.3e}] m",
        sim.len(), nt, sim.get_barrier().0, sim.get_barrier().1,
    );

    while !sim.is_done() {
        sim.step()?;
        let i = sim.steps_taken();
        if i % SNAPSHOT_EVERY == 0 || i == nt {
            let q = sim.state();
            let peak = q.iter().map(|qj| qj.norm()).fold(0.0, f64::max);
            log::info!(
                "{:>6}/{}  t = {:.3e} s  norm error = {:.3e}%  \
                peak = {:.3e}",
                i, nt, sim.elapsed(), sim.norm_error(), peak / sim.packet_max(),
            );
        }
    }

    let R = sim.reflection();
    let T = sim.transmission();
    log::info!("reflected:   {:.4}", R);
    log::info!("transmitted: {:.4}", T);
    log::info!("in barrier:  {:.4}", sim.norm() - R - T);
    log::info!("norm error:  {:.3e}%", sim.norm_error());
    Ok(())
}
