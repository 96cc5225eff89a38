use make_prefetch::cli::{Algorithm, OutputStyle};
use make_prefetch::hash::{FileDigest, PLACEHOLDER_URL};
use make_prefetch::output::{render, select_template, template};
use make_prefetch::prefetch_statement;
use make_prefetch::refusal::{PrefetchError, RefusalCode};

const HELLO_SHA1_HEX: &str = "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d";
const HELLO_SHA256_HEX: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

fn hello_digest() -> FileDigest {
    FileDigest {
        name: "hello.txt".to_owned(),
        url: PLACEHOLDER_URL,
        size: 5,
        sha1: HELLO_SHA1_HEX.to_owned(),
        sha256: HELLO_SHA256_HEX.to_owned(),
    }
}

#[test]
fn prefetch_style_follows_algorithm() {
    let digest = hello_digest();

    assert_eq!(
        prefetch_statement(OutputStyle::Prefetch, Algorithm::All, &digest).expect("all"),
        format!(
            "prefetch hello.txt sha1:{HELLO_SHA1_HEX} size:5 http://REPLACEME sha256:{HELLO_SHA256_HEX}"
        )
    );
    assert_eq!(
        prefetch_statement(OutputStyle::Prefetch, Algorithm::Sha1, &digest).expect("sha1"),
        format!("prefetch hello.txt sha1:{HELLO_SHA1_HEX} size:5 http://REPLACEME")
    );
    assert_eq!(
        prefetch_statement(OutputStyle::Prefetch, Algorithm::Sha256, &digest).expect("sha256"),
        format!("prefetch hello.txt size:5 http://REPLACEME sha256:{HELLO_SHA256_HEX}")
    );
}

#[test]
fn davis_block_carries_sha1_for_all_and_sha1() {
    let digest = hello_digest();
    let expected = format!(
        "begin prefetch block\n\
         add prefetch item name=hello.txt sha1={HELLO_SHA1_HEX} size=5 url=http://REPLACEME\n\
         collect prefetch items\n\
         end prefetch block"
    );

    for algorithm in [Algorithm::All, Algorithm::Sha1] {
        let block = prefetch_statement(OutputStyle::Davis, algorithm, &digest).expect("davis");
        assert_eq!(block, expected);
        assert_eq!(block.lines().count(), 4);
    }
}

#[test]
fn davis_refuses_sha256() {
    let err = select_template(OutputStyle::Davis, Algorithm::Sha256).expect_err("sha256 davis");
    assert!(matches!(
        err,
        PrefetchError::UnsupportedDavisAlgorithm(Algorithm::Sha256)
    ));
    assert_eq!(
        err.to_string(),
        "Algorithm sha256 is not supported in davis downloads"
    );
    assert_eq!(err.code(), RefusalCode::Unsupported);
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn value_style_emits_one_bare_digest() {
    let digest = hello_digest();
    assert_eq!(
        prefetch_statement(OutputStyle::Value, Algorithm::Sha1, &digest).expect("sha1 value"),
        HELLO_SHA1_HEX
    );
    assert_eq!(
        prefetch_statement(OutputStyle::Value, Algorithm::Sha256, &digest).expect("sha256 value"),
        HELLO_SHA256_HEX
    );

    let err = prefetch_statement(OutputStyle::Value, Algorithm::All, &digest)
        .expect_err("value needs one algorithm");
    assert_eq!(err.to_string(), "You must specify a hash algorithm to use");
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn substitution_inserts_values_verbatim() {
    let mut digest = hello_digest();
    digest.name = "{sha1} {weird}.bin".to_owned();
    digest.sha1 = "ABCDEF".to_owned();

    let rendered = render(template::PREFETCH_SHA1, &digest);
    assert_eq!(
        rendered,
        "prefetch {sha1} {weird}.bin sha1:ABCDEF size:5 http://REPLACEME"
    );
}

#[test]
fn unknown_placeholders_and_stray_braces_are_left_alone() {
    let digest = hello_digest();
    assert_eq!(
        render("{name} {unknown} {size", &digest),
        "hello.txt {unknown} {size"
    );
}
