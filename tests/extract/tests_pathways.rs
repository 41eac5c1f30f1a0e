use drugbank::{Document, Extractor, tables};
use rstest::rstest;

use crate::helpers::fixtures::PATHWAY_PAIR;
use crate::helpers::{run, write_fixture};

#[rstest]
#[case("DrugA", 2)]
#[case("DrugB", 1)]
#[case("DrugC", 1)]
fn test_pathway_count_per_drug(#[case] drug: &str, #[case] expected: usize) {
    let pathways = run(PATHWAY_PAIR, &tables::pathway_spec());
    let counts = tables::pathway_drug_counts(&pathways);
    assert_eq!(tables::pathway_count_for(&counts, drug).unwrap(), expected);
}

#[test]
fn test_pathway_counts_from_file() {
    let (_dir, path) = write_fixture(PATHWAY_PAIR, "pathways.xml");
    let document = Document::from_path(&path).unwrap();
    let pathways = Extractor::for_document(&document).run(&document, &tables::pathway_spec());

    assert_eq!(pathways.len(), 2);
    assert_eq!(pathways.rows()[0].list("drug_names"), ["DrugA", "DrugB"]);

    let counts = tables::pathway_drug_counts(&pathways);
    assert_eq!(
        tables::sorted_counts(&counts),
        vec![
            ("DrugA".to_string(), 2),
            ("DrugB".to_string(), 1),
            ("DrugC".to_string(), 1),
        ]
    );
    assert!(tables::pathway_count_for(&counts, "DrugZ").unwrap_err().is_not_found());
}

#[test]
fn test_bipartite_graph_links_pathways_to_drugs() {
    let pathways = run(PATHWAY_PAIR, &tables::pathway_spec());
    let graph = tables::bipartite_graph(&pathways);
    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 4);
    assert!(graph.has_edge("P1", "DrugA"));
    assert!(graph.has_edge("P2", "DrugC"));
    assert!(!graph.has_edge("P1", "DrugC"));
}
