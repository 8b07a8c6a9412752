//! Hook benchmark
//!
//! Times the four runtime operations independently over a configured number
//! of iterations, each on a fresh subject entity:
//! 1. `EnchantmentStore::set` on DexBonus
//! 2. `EnchantmentStore::get` on DexBonus
//! 3. ordered `OnHeal` dispatch
//! 4. unordered `OnHeal` dispatch

use crate::config::BenchConfig;
use crate::enchantments::{DexBonus, HealingBonus, PhysicalResist};
use enchant_core::{Enchanted, Entity, EntityId, HookCall, HookError};
use serde::Serialize;
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::info;

const SUBJECT: EntityId = EntityId(1);

/// Timing of one benchmarked operation
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub name: &'static str,
    pub iterations: u32,
    pub total_ns: u128,
    pub avg_ns: f64,
}

impl BenchReport {
    fn new(name: &'static str, iterations: u32, elapsed: Duration) -> Self {
        let total_ns = elapsed.as_nanos();
        BenchReport {
            name,
            iterations,
            total_ns,
            avg_ns: total_ns as f64 / f64::from(iterations.max(1)),
        }
    }
}

/// All reports of one benchmark run
#[derive(Debug, Clone, Serialize)]
pub struct BenchSummary {
    pub reports: Vec<BenchReport>,
    pub total_ns: u128,
}

/// The entity every benchmark runs against
pub fn bench_subject(config: &BenchConfig) -> Entity {
    let mut subject = Entity::new(SUBJECT);
    let store = subject.enchantments_mut();
    store.attach(DexBonus {
        value: config.dex_bonus,
    });
    store.attach(HealingBonus { percent: 10.0 });
    store.attach(PhysicalResist { percent: 25.0 });
    subject
}

/// Time `op` over `iterations` calls against a fresh subject
pub fn run_bench<F>(
    name: &'static str,
    iterations: u32,
    config: &BenchConfig,
    mut op: F,
) -> Result<BenchReport, HookError>
where
    F: FnMut(u32, &mut Entity) -> Result<(), HookError>,
{
    let mut subject = bench_subject(config);

    let start = Instant::now();
    for i in 0..iterations {
        op(i, &mut subject)?;
    }
    let report = BenchReport::new(name, iterations, start.elapsed());

    info!(
        bench = name,
        iterations,
        total_ns = %report.total_ns,
        avg_ns = report.avg_ns,
        "benchmark finished"
    );
    Ok(report)
}

/// Run the four hook benchmarks
pub fn benchmark_hooks(config: &BenchConfig) -> Result<BenchSummary, HookError> {
    let pause = Duration::from_millis(config.pause_ms);
    let iterations = config.iterations;
    let heal = config.heal_amount;
    let mut reports = Vec::with_capacity(4);

    reports.push(run_bench("EnchantmentStore::set", iterations, config, |i, subject| {
        subject
            .enchantments_mut()
            .set(|e: &mut DexBonus| e.value = i as i32);
        Ok(())
    })?);
    std::thread::sleep(pause);

    reports.push(run_bench("EnchantmentStore::get", iterations, config, |_, subject| {
        black_box(subject.enchantments().get(|e: &DexBonus| e.value));
        Ok(())
    })?);
    std::thread::sleep(pause);

    reports.push(run_bench("dispatch::fire_ordered_hook", iterations, config, |_, subject| {
        let mut amount = heal;
        subject.fire_ordered_hook(HookCall::heal(SUBJECT, SUBJECT, None, &mut amount))?;
        black_box(amount);
        Ok(())
    })?);

    reports.push(run_bench("dispatch::fire_hook", iterations, config, |_, subject| {
        let mut amount = heal;
        subject.fire_hook(HookCall::heal(SUBJECT, SUBJECT, None, &mut amount))?;
        black_box(amount);
        Ok(())
    })?);

    let total_ns = reports.iter().map(|r| r.total_ns).sum();
    info!(total_ns = %total_ns, "finished all benchmarks");
    Ok(BenchSummary { reports, total_ns })
}
