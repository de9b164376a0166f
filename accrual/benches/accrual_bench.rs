use criterion::{black_box, criterion_group, criterion_main, Criterion};

use harvest_accrual::{pending_at, settle, AccountState, ProgramState};
use harvest_types::{AssetId, ParticipantId, Timestamp};

fn make_program() -> ProgramState {
    let mut program = ProgramState::new(ParticipantId::new("admin"), ParticipantId::new("program"));
    program.stake_asset = AssetId::new(1);
    program.reward_asset = AssetId::new(2);
    program.reward_rate = 1_000;
    program.total_reward_pool = u128::MAX / 4;
    program.start_time = Timestamp::new(0);
    program.end_time = Timestamp::new(10_000_000);
    program
}

fn bench_settle(c: &mut Criterion) {
    c.bench_function("settle", |b| {
        b.iter_batched(
            || {
                let mut account = AccountState::new();
                account.stake = 1_000_000;
                (make_program(), account)
            },
            |(mut program, mut account)| {
                let _ = black_box(settle(
                    &mut program,
                    &mut account,
                    black_box(Timestamp::new(5_000)),
                ));
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_pending_preview(c: &mut Criterion) {
    let program = make_program();
    let mut account = AccountState::new();
    account.stake = 1_000_000;

    c.bench_function("pending_at", |b| {
        b.iter(|| {
            black_box(pending_at(
                black_box(&program),
                black_box(&account),
                black_box(Timestamp::new(5_000)),
            ))
        });
    });
}

criterion_group!(benches, bench_settle, bench_pending_preview);
criterion_main!(benches);
