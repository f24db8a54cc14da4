use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mw_text::{chunk_text, detect_changes, extract, normalize, Node};
use rand::Rng;

fn generate_text(size_kb: usize) -> String {
    let sentences = [
        "Patient presents with a three-day history of fever and productive cough.",
        "BP was 120/80 mmHg and heart rate 92 bpm.",
        "No known drug allergies.",
        "Chest auscultation revealed crackles in the right lower lobe!",
        "Is the infiltrate consistent with community-acquired pneumonia?",
    ];
    let mut text = String::with_capacity(size_kb * 1024);
    let mut i = 0;
    while text.len() < size_kb * 1024 {
        text.push_str(sentences[i % sentences.len()]);
        text.push(' ');
        if i % 5 == 4 { text.push_str("\n\n"); }
        i += 1;
    }
    text
}

fn generate_tree(paragraphs: usize) -> Node {
    let children = (0..paragraphs)
        .map(|i| {
            Node::element("p", vec![
                Node::leaf(format!("Paragraph {} opens here. ", i)),
                Node::element("strong", vec![Node::leaf("Key finding.")]),
                Node::leaf(" Closing remark."),
            ])
        })
        .collect();
    Node::element("div", children)
}

fn bench_normalize(c: &mut Criterion) {
    let text_100k = generate_text(100).replace(' ', "  \t");
    c.bench_function("normalize_100kb", |b| {
        b.iter(|| black_box(normalize(black_box(&text_100k))))
    });
}

fn bench_extract(c: &mut Criterion) {
    let tree = generate_tree(1_000);
    c.bench_function("extract_1000_paragraphs", |b| {
        b.iter(|| black_box(extract(black_box(&tree))))
    });
}

fn bench_chunk(c: &mut Criterion) {
    let text_10k = generate_text(10);
    let text_100k = generate_text(100);
    c.bench_function("chunk_10kb", |b| {
        b.iter(|| black_box(chunk_text(black_box(&text_10k), 500)))
    });
    c.bench_function("chunk_100kb", |b| {
        b.iter(|| black_box(chunk_text(black_box(&text_100k), 500)))
    });
}

fn bench_detect_changes(c: &mut Criterion) {
    let old = generate_text(100);
    let mut rng = rand::thread_rng();
    let edits: Vec<String> = (0..16)
        .map(|_| {
            let mut at = rng.gen_range(0..old.len());
            while !old.is_char_boundary(at) {
                at -= 1;
            }
            let mut new = old.clone();
            new.insert_str(at, "edit ");
            new
        })
        .collect();
    c.bench_function("detect_changes_100kb", |b| {
        b.iter(|| {
            for new in &edits {
                black_box(detect_changes(black_box(&old), black_box(new)));
            }
        })
    });
}

criterion_group!(benches, bench_normalize, bench_extract, bench_chunk, bench_detect_changes);
criterion_main!(benches);
