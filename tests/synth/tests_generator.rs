use drugbank::synth::{FirstSampler, Generator, IdFormat, Pools, RandomSampler};
use drugbank::tree::find_all_children;
use drugbank::{Document, Extractor, Namespace, tables};

use crate::helpers::fixtures::{GENERATOR_SOURCE, SAMPLE_EXPORT};
use crate::helpers::{parse, write_fixture};

fn drug_ids(document: &Document) -> Vec<String> {
    let table = Extractor::for_document(document).run(document, &tables::synonym_spec());
    table
        .rows()
        .iter()
        .filter_map(|r| r.text("drug_id").map(str::to_string))
        .collect()
}

#[test]
fn test_new_ids_continue_after_maximum() {
    let document = parse(GENERATOR_SOURCE);
    let generated = Generator::new(Namespace::drugbank(), 5)
        .generate(&document, &mut FirstSampler)
        .unwrap();

    assert_eq!(generated.report.original_count, 3);
    assert_eq!(generated.report.synthesized_count, 2);
    assert_eq!(generated.report.first_id.as_deref(), Some("DB00008"));
    assert_eq!(generated.report.last_id.as_deref(), Some("DB00009"));
    assert_eq!(
        drug_ids(&generated.document),
        ["DB00007", "DB00003", "DBxx", "DB00008", "DB00009"]
    );
}

#[test]
fn test_first_sampler_copies_first_pool_entries() {
    let document = parse(GENERATOR_SOURCE);
    let generated = Generator::new(Namespace::drugbank(), 4)
        .generate(&document, &mut FirstSampler)
        .unwrap();

    let synthesized = generated.document.root().children.last().unwrap();
    assert_eq!(synthesized.local_name(), "drug");
    assert_eq!(synthesized.attribute("type"), Some("small molecule"));

    let ns = Namespace::drugbank();
    let text = |path: &str| {
        find_all_children(synthesized, &ns, path)
            .first()
            .and_then(|n| n.text.clone())
    };
    assert_eq!(text("drugbank-id").as_deref(), Some("DB00008"));
    assert_eq!(text("name").as_deref(), Some("DrugOne"));
    assert_eq!(text("description").as_deref(), Some("Description One"));
    assert_eq!(text("state").as_deref(), Some("solid"));
    assert_eq!(find_all_children(synthesized, &ns, "drugbank-id").len(), 1);
}

#[test]
fn test_round_trip_keeps_originals_retrievable() {
    let source = parse(SAMPLE_EXPORT);
    let generated = Generator::new(Namespace::of(&source), 10)
        .generate(&source, &mut RandomSampler::seeded(7))
        .unwrap();

    let (_dir, path) = write_fixture("", "inflated.xml");
    generated.document.write_to_path(&path).unwrap();
    let reread = Document::from_path(&path).unwrap();
    assert_eq!(
        reread.root().prefixes.get("xsi").map(String::as_str),
        Some("http://www.w3.org/2001/XMLSchema-instance")
    );
    assert!(reread.root().attribute("xsi:schemaLocation").is_some());

    let extractor = Extractor::for_document(&reread);
    let drugs = extractor.run(&reread, &tables::drug_spec());
    assert_eq!(drugs.len(), 10);
    let lepirudin = tables::find_drug(&drugs, "DB00001").unwrap();
    assert_eq!(lepirudin.text("name"), Some("Lepirudin"));
    assert!(tables::find_drug(&drugs, "DB00011").is_ok());
    assert!(tables::find_drug(&drugs, "DB00017").is_ok());
}

#[test]
fn test_same_seed_same_output() {
    let source = parse(SAMPLE_EXPORT);
    let generator = Generator::new(Namespace::of(&source), 8);
    let a = generator.generate(&source, &mut RandomSampler::seeded(42)).unwrap();
    let b = generator.generate(&source, &mut RandomSampler::seeded(42)).unwrap();
    assert_eq!(
        a.document.to_xml_bytes().unwrap(),
        b.document.to_xml_bytes().unwrap()
    );
}

#[test]
fn test_target_below_count_is_rejected() {
    let source = parse(SAMPLE_EXPORT);
    let result = Generator::new(Namespace::of(&source), 2).generate(&source, &mut FirstSampler);
    assert!(matches!(
        result,
        Err(drugbank::DrugbankError::Validation(_))
    ));
}

#[test]
fn test_pools_exclude_identifier_tag() {
    let document = parse(GENERATOR_SOURCE);
    let ns = Namespace::drugbank();
    let pools = Pools::build(&document.root().children, &ns, "drugbank-id", 100);

    assert!(!pools.contains("drugbank-id"));
    assert_eq!(pools.get("name").map(<[_]>::len), Some(3));
    assert_eq!(pools.get("state").map(<[_]>::len), Some(1));
    assert_eq!(pools.tags().collect::<Vec<_>>(), ["name", "description", "state"]);
}

#[test]
fn test_custom_id_format() {
    let document = parse(GENERATOR_SOURCE);
    let generated = Generator::new(Namespace::drugbank(), 4)
        .with_id_format(IdFormat::new("DB", 7))
        .generate(&document, &mut FirstSampler)
        .unwrap();
    assert_eq!(generated.report.first_id.as_deref(), Some("DB0000008"));
}
