use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use tempfile::TempDir;

use seatbook::database::{Database, DatabaseConfig};
use seatbook::{parse_code, Cabin, Passenger, SeatCode, SeatMap, SeatStatus};

const RESTORE_SIZES: &[usize] = &[10, 100, 474];

fn setup_cabin() -> (TempDir, Cabin) {
    let temp_dir = TempDir::new().expect("failed to create temporary directory");
    let config = DatabaseConfig::in_data_dir(temp_dir.path());
    let db = Database::open(config).expect("failed to open temporary database");
    let cabin = Cabin::open(db).expect("failed to open cabin");
    (temp_dir, cabin)
}

fn passenger() -> Passenger {
    Passenger::new("X123", "Ada", "Lovelace").expect("valid passenger")
}

fn bench_parse_code(c: &mut Criterion) {
    c.bench_function("parse_code", |b| {
        b.iter(|| {
            for code in ["1A", "12b", " 80F ", "77D", "B12", "81A"] {
                black_box(parse_code(black_box(code)).ok());
            }
        });
    });
}

fn bench_list_free(c: &mut Criterion) {
    let mut map = SeatMap::new();
    for seat in SeatCode::all().step_by(3) {
        if map.status_of(seat) == SeatStatus::Free {
            map.set_status(seat, SeatStatus::Reserved);
        }
    }

    c.bench_function("list_free", |b| b.iter(|| black_box(map.list_free())));
}

fn bench_render(c: &mut Criterion) {
    let map = SeatMap::new();
    c.bench_function("render", |b| b.iter(|| black_box(map.render())));
}

fn bench_book_single(c: &mut Criterion) {
    c.bench_function("book_single", |b| {
        b.iter_batched(
            setup_cabin,
            |(temp_dir, mut cabin)| {
                let _temp_dir = temp_dir;
                let reference = cabin
                    .book_seat("12B", passenger())
                    .expect("failed to book seat");
                black_box(reference);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_open_with_bookings(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_with_bookings");

    for &size in RESTORE_SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &count| {
            b.iter_batched(
                || {
                    let (temp_dir, mut cabin) = setup_cabin();
                    let free = cabin.list_available().seats;
                    for seat in free.iter().take(count) {
                        cabin
                            .book_seat(&seat.to_string(), passenger())
                            .expect("failed to book seat");
                    }
                    drop(cabin);
                    let config = DatabaseConfig::in_data_dir(temp_dir.path());
                    (temp_dir, config)
                },
                |(temp_dir, config)| {
                    let _temp_dir = temp_dir;
                    let db = Database::open(config).expect("failed to reopen database");
                    black_box(Cabin::open(db).expect("failed to reopen cabin"));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_code,
    bench_list_free,
    bench_render,
    bench_book_single,
    bench_open_with_bookings
);
criterion_main!(benches);
