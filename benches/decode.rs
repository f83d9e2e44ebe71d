// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use compass::format::{decode_analysis, decode_table};

mod profiler;
mod replies;

// Group names (`format.decode_table`, `format.decode_analysis`) and case ids are kept stable so
// results stay comparable across refactors.
fn benches_decode(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("format.decode_table");
        for case in replies::Case::ALL {
            let lines = replies::search_reply(case);
            group.throughput(Throughput::Elements(case.rows() as u64));
            group.bench_function(case.id(), |b| {
                b.iter(|| black_box(decode_table(black_box(&lines))).len())
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("format.decode_analysis");
        for case in replies::Case::ALL {
            let lines = replies::search_reply(case);
            group.throughput(Throughput::Elements(lines.len() as u64));
            group.bench_function(case.id(), |b| {
                b.iter(|| black_box(decode_analysis(black_box(&lines))).blocks().len())
            });
        }
        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_decode
}
criterion_main!(benches);
