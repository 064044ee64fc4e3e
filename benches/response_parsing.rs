use std::hint::black_box;
use std::fmt::Write;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use qr_ai::parsers::{parse_interview_response, parse_meta_response};

/// Generate a meta-mode reply with N learning goal blocks and some chatter between them
fn generate_meta_reply(num_goals: usize) -> String {
    let mut reply = String::from("Here is my analysis of the interviews.\n\n");
    for i in 1..=num_goals {
        writeln!(reply, "[Learning Goal {}]", i).unwrap();
        writeln!(reply, "Answer: Customers mention pricing and onboarding for goal {}.", i).unwrap();
        writeln!(reply, "Evidence:").unwrap();
        for j in 0..3 {
            writeln!(reply, "- Quote: \"quote {} for goal {}\"", j, i).unwrap();
            writeln!(reply, "  Context: Interview {} discussing renewals", j + 1).unwrap();
        }
        writeln!(reply, "Confidence: {}", (i * 13) % 100).unwrap();
        writeln!(reply).unwrap();
    }
    reply
}

/// Generate a single-mode reply with N learning goal blocks
fn generate_interview_reply(num_goals: usize) -> String {
    let mut reply = String::new();
    for i in 1..=num_goals {
        writeln!(reply, "[Learning Goal {}]", i).unwrap();
        writeln!(reply, "Answer: The customer answered goal {}.", i).unwrap();
        writeln!(reply, "Evidence:").unwrap();
        writeln!(reply, "- Timestamp: 00:{:02}:00", i % 60).unwrap();
        writeln!(reply, "  Quote: \"quote for goal {}\"", i).unwrap();
        writeln!(reply, "  Explanation: stated directly").unwrap();
        writeln!(reply, "Confidence: Medium").unwrap();
    }
    reply
}

fn bench_parse_meta(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_meta_response");

    for size in [5, 50, 500].iter() {
        let reply = generate_meta_reply(*size);

        group.throughput(Throughput::Bytes(reply.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| parse_meta_response(black_box(&reply)));
        });
    }

    group.finish();
}

fn bench_parse_interview(c: &mut Criterion) {
    let reply = generate_interview_reply(20);

    c.bench_function("parse_interview_response", |b| {
        b.iter(|| parse_interview_response(black_box(&reply)));
    });
}

criterion_group!(benches, bench_parse_meta, bench_parse_interview);
criterion_main!(benches);
