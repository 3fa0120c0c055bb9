//! End-to-end demo of the wildcard engine.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `wildcard_gen` works end to end:
//!
//! 1. **Building a library** — sources are plain text blocks, one entry per
//!    line, with an optional `weight:` prefix (default weight 100).
//! 2. **Template choices** — the reserved `template` set doubles as the
//!    list of selectable templates, original lines preserved.
//! 3. **Generation** — fixed seeds, so the output is deterministic and
//!    reproducible; rerun the demo and the text is identical.
//! 4. **Inline alternatives** — `<a|b|4:c>` draws without any named set.
//! 5. **Bounded self-reference** — a cyclic set stops at the iteration cap
//!    and reports `fully_resolved: false` instead of looping forever.
//! 6. **Round-trip editing** — a set is turned back into its editable text,
//!    amended, and swapped back in.
//!
//! Set `RUST_LOG=debug` to watch the resolver's pass counts.

use wildcard_gen::{
    generate_text, to_client_state, GenerateRequest, WildcardLibrary,
};

/// Generate with a fixed seed and pretty-print the outcome.
fn show(library: &WildcardLibrary, template: &str, seed: u64) {
    match generate_text(
        GenerateRequest {
            template: template.into(),
            max_iterations: 30,
            rng_seed: Some(seed),
        },
        library,
    ) {
        Ok(out) => {
            let mark = if out.fully_resolved { " " } else { "!" };
            println!("  [{mark}] {template}");
            println!("      -> {}   (seed={seed}, {} passes)", out.text, out.passes);
        }
        Err(err) => println!("  [x] {template}\n      -> error: {err}"),
    }
}

fn main() {
    env_logger::init();

    // ── Build a library ──────────────────────────────────────────────────────
    // One source per name; load_dir() does the same from a folder of .txt
    // files, one set per file stem.
    let mut library = WildcardLibrary::new();
    library.replace_source("animal", "cat\ndog\n25:fennec fox\nowl");
    library.replace_source("mood", "sleepy\ngrumpy\n5:ecstatic");
    library.replace_source("place", "rooftop\nlibrary\n10:moonlit garden");
    library.replace_source("scene", "a <mood> <animal>\nthe <animal> of the <place>");
    library.replace_source(
        "template",
        "<scene>, watched from the <place>\n50:just <scene>",
    );

    println!();
    println!("══ Library ══");
    println!();
    for name in library.names() {
        let count = library.entries(name).map_or(0, <[_]>::len);
        println!("  {name} ({count})");
    }

    // ── Template choices ─────────────────────────────────────────────────────
    println!();
    println!("══ Template choices (reserved `template` set) ══");
    println!();
    for choice in library.template_choices() {
        println!("  {choice}");
    }

    // ── Deterministic generation ─────────────────────────────────────────────
    // Nested placeholders resolve one level per pass: template -> scene ->
    // animal/mood/place.
    println!();
    println!("══ Generation (fixed seeds) ══");
    println!();
    for (seed, choice) in [(1u64, 0usize), (7, 0), (42, 1), (1337, 1)] {
        let template = library.template_choices()[choice].clone();
        show(&library, &template, seed);
    }

    // ── Inline alternatives ──────────────────────────────────────────────────
    println!();
    println!("══ Inline alternatives ══");
    println!();
    show(&library, "the <animal> looks <calm|2:wild|7:unreadable>", 5);
    show(&library, "<1:rarely|99:usually> <mood>", 5);

    // ── Bounded self-reference ───────────────────────────────────────────────
    // `ouroboros` reintroduces itself forever; the cap stops the loop and
    // the leftover token is reported, not raised.
    println!();
    println!("══ Bounded self-reference ══");
    println!();
    library.replace_source("ouroboros", "tail of <ouroboros>");
    show(&library, "<ouroboros>", 3);

    // ── Round-trip editing ───────────────────────────────────────────────────
    println!();
    println!("══ Round-trip editing ══");
    println!();
    let before = library.source_text("mood").unwrap();
    println!("  mood.txt before:");
    for line in before.lines() {
        println!("    {line}");
    }
    library.replace_source("mood", &format!("{before}\n2:melancholic"));
    println!("  mood.txt after appending `2:melancholic`:");
    for line in library.source_text("mood").unwrap().lines() {
        println!("    {line}");
    }

    // ── Client payload ───────────────────────────────────────────────────────
    // What a client would receive: sorted listing, dropdown choices, result.
    println!();
    println!("══ Client payload ══");
    println!();
    let out = generate_text(
        GenerateRequest {
            template: library.template_choices()[0].clone(),
            max_iterations: 30,
            rng_seed: Some(42),
        },
        &library,
    )
    .expect("library is non-empty");
    let payload = to_client_state(&library, Some(&out));
    println!("{}", serde_json::to_string_pretty(&payload).expect("payload serialises"));
}
