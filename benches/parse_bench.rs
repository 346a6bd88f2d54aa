use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use customs_expand::ai::prompts::build_similar_questions_prompt;
use customs_expand::expand::{normalize_similar_questions, parse_lines};

fn create_mock_response(lines: usize) -> String {
    (0..lines)
        .map(|i| match i % 4 {
            0 => format!("{}. 관세 환급 신청 방법은 무엇인가요? ({})", i + 1, i),
            1 => format!("- 수입 관세를 돌려받는 절차 {}", i),
            2 => "# 참고".to_string(),
            _ => String::new(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_parse_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_lines");

    for line_count in [3, 20, 200].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(line_count),
            line_count,
            |b, &count| {
                let raw = create_mock_response(count);
                b.iter(|| {
                    let parsed = parse_lines(black_box(&raw));
                    black_box(normalize_similar_questions(parsed, "가산세 면제"));
                });
            },
        );
    }
    group.finish();
}

fn bench_build_prompt(c: &mut Criterion) {
    let terms: Vec<String> = (0..1000).map(|i| format!("용어{:04}", i)).collect();

    c.bench_function("build_similar_questions_prompt", |b| {
        b.iter(|| {
            black_box(build_similar_questions_prompt(
                black_box("가산세 면제에 대해 논의한 판례"),
                &terms,
            ));
        });
    });
}

criterion_group!(benches, bench_parse_lines, bench_build_prompt);
criterion_main!(benches);
