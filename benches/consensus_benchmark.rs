use criterion::measurement::WallTime;
use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};

use zfx_snowdag::graph::{Block, Direction, DAG};
use zfx_snowdag::id::Id;
use zfx_snowdag::snowball::SnowBall;

pub fn run_dag_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("dag_benchmark");
    let iterations = vec![100, 1000];

    insert_chain_benchmark(&mut group, iterations.clone());
    search_fan_benchmark(&mut group, iterations.clone());
    traverse_chain_benchmark(&mut group, iterations.clone());
    success_pool_fan_benchmark(&mut group, iterations.clone());

    group.finish();
}

pub fn run_snowball_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("snowball_benchmark");
    for i in [100u64, 1000u64, 10000u64].iter() {
        group.throughput(Throughput::Elements(*i));
        group.bench_with_input(BenchmarkId::new("success_pool", i), i, |b, i| {
            b.iter(|| {
                let mut snowball = SnowBall::new(0u64, *i as usize);
                for round in 0..*i {
                    snowball.success_pool(black_box(round % 3));
                }
                snowball.decided()
            })
        });
    }
    group.finish();
}

fn make_ids(n: u64) -> Vec<Id> {
    let genesis = Id::new(b"genesis");
    (0..n).map(|i| genesis.child(i)).collect()
}

// genesis <- 0 <- 1 <- ... <- n-1
fn make_chain(ids: &[Id]) -> DAG<Id> {
    let mut dag = DAG::new();
    let genesis = Id::new(b"genesis");
    dag.add_block(Block::new(genesis), &[]).unwrap();
    let mut parent = genesis;
    for id in ids.iter() {
        dag.add_block(Block::new(*id), &[parent]).unwrap();
        parent = *id;
    }
    dag
}

// genesis <- {0, 1, ..., n-1}
fn make_fan(ids: &[Id]) -> DAG<Id> {
    let mut dag = DAG::new();
    let genesis = Id::new(b"genesis");
    dag.add_block(Block::new(genesis), &[]).unwrap();
    for id in ids.iter() {
        dag.add_block(Block::new(*id), &[genesis]).unwrap();
    }
    dag
}

fn insert_chain_benchmark(group: &mut BenchmarkGroup<WallTime>, iterations: Vec<u64>) {
    for i in iterations.iter() {
        let ids = make_ids(*i);

        group.throughput(Throughput::Elements(*i));
        group.bench_with_input(BenchmarkId::new("insert_chain", i), i, |b, _| {
            b.iter(|| make_chain(&ids))
        });
    }
}

fn search_fan_benchmark(group: &mut BenchmarkGroup<WallTime>, iterations: Vec<u64>) {
    for i in iterations.iter() {
        let ids = make_ids(*i);
        let dag = make_fan(&ids);
        let query = vec![ids[ids.len() - 1]];

        group.throughput(Throughput::Elements(*i));
        group.bench_with_input(BenchmarkId::new("search_fan", i), i, |b, _| {
            b.iter(|| dag.search(black_box(&query)))
        });
    }
}

fn traverse_chain_benchmark(group: &mut BenchmarkGroup<WallTime>, iterations: Vec<u64>) {
    for i in iterations.iter() {
        let ids = make_ids(*i);
        let dag = make_chain(&ids);
        let tail = dag.search(&[ids[ids.len() - 1]])[0];

        group.throughput(Throughput::Elements(*i));
        group.bench_with_input(BenchmarkId::new("traverse_chain", i), i, |b, _| {
            b.iter(|| dag.traverse(black_box(tail), Direction::Reverse))
        });
    }
}

fn success_pool_fan_benchmark(group: &mut BenchmarkGroup<WallTime>, iterations: Vec<u64>) {
    for i in iterations.iter() {
        let ids = make_ids(*i);
        let dag = make_fan(&ids);

        group.throughput(Throughput::Elements(*i));
        group.bench_with_input(BenchmarkId::new("success_pool_fan", i), i, |b, _| {
            b.iter(|| {
                // A single round never reaches the decision threshold, the DAG is reused.
                let mut dag = dag.clone();
                dag.success_pool(black_box(&ids[0]), &ids);
                dag
            })
        });
    }
}

criterion_group!(benches, run_dag_benchmark, run_snowball_benchmark);
criterion_main!(benches);
