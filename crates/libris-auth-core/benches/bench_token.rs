//! Benchmarks for login hot paths: claim composition, token issuance, verification

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use libris_auth_core::{compose_claims, hash_password, verify_password, AuthConfig, TokenIssuer};
use libris_db::UserRow;
use libris_types::{claim_names, Claim};
use uuid::Uuid;

const SECRET: &str = "0123456789abcdef0123456789abcdef";

fn issuer() -> TokenIssuer {
    let config = AuthConfig::try_new(SECRET, "libris", "libris-clients", 1).unwrap();
    TokenIssuer::new(&config)
}

fn sample_user() -> UserRow {
    UserRow {
        id: Uuid::new_v4(),
        email: "reader@example.com".to_string(),
        password_hash: "$argon2id$bench".to_string(),
        first_name: "Avid".to_string(),
        last_name: "Reader".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn claim_sequence(roles: usize) -> Vec<Claim> {
    let mut claims = vec![
        Claim::new(claim_names::SUB, "reader@example.com"),
        Claim::new(claim_names::JTI, Uuid::new_v4().to_string()),
        Claim::new(claim_names::EMAIL, "reader@example.com"),
        Claim::new(claim_names::UID, Uuid::new_v4().to_string()),
    ];
    for i in 0..roles {
        claims.push(Claim::new(claim_names::ROLE, format!("Role{i}")));
    }
    claims
}

fn bench_claim_composition(c: &mut Criterion) {
    let user = sample_user();
    let role_counts = [0usize, 2, 8];

    let mut group = c.benchmark_group("compose_claims");

    for count in role_counts {
        let roles: Vec<String> = (0..count).map(|i| format!("Role{i}")).collect();

        group.bench_with_input(BenchmarkId::from_parameter(count), &roles, |b, roles| {
            b.iter(|| compose_claims(black_box(&user), Vec::new(), black_box(roles)));
        });
    }

    group.finish();
}

fn bench_token_issue(c: &mut Criterion) {
    let issuer = issuer();
    let role_counts = [1usize, 4, 16];

    let mut group = c.benchmark_group("token_issue");

    for count in role_counts {
        let claims = claim_sequence(count);

        group.bench_with_input(BenchmarkId::from_parameter(count), &claims, |b, claims| {
            b.iter(|| issuer.issue(black_box(claims)).unwrap());
        });
    }

    group.finish();
}

fn bench_token_verify(c: &mut Criterion) {
    let issuer = issuer();
    let role_counts = [1usize, 4, 16];

    let mut group = c.benchmark_group("token_verify");

    for count in role_counts {
        let token = issuer.issue(&claim_sequence(count)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(count), &token, |b, token| {
            b.iter(|| issuer.verify(black_box(token)).unwrap());
        });
    }

    group.finish();
}

fn bench_password_verify(c: &mut Criterion) {
    let hash = hash_password("Passw0rd!").unwrap();

    c.bench_function("password_verify", |b| {
        b.iter(|| verify_password(black_box("Passw0rd!"), black_box(&hash)));
    });
}

criterion_group!(
    benches,
    bench_claim_composition,
    bench_token_issue,
    bench_token_verify,
    bench_password_verify,
);
criterion_main!(benches);
