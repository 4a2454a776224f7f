// End-to-end tests: CSV tables through tagging, ranking and bundling.

use cagematch::bundle::bundles_for_selection;
use cagematch::data::{read_content, read_fighters, read_fights, Tables};
use cagematch::models::ContentItem;
use cagematch::similarity::{
    aggregate_for_selection, available_filters, rank_content_for_fighter, rank_fighters_for_content,
    recommend_for_filter, CatalogFilter,
};
use cagematch::tags::KeywordTagger;

const CONTENT_CSV: &str = "\
id,title,type,genres,description
rocky,Rocky,Movie,Drama,\"A small-time boxer, long considered an underdog, gets an unlikely shot at the heavyweight championship.\"
warrior,Warrior,Movie,Action,\"Two estranged brothers, one a veteran, face each other in a brutal mixed martial arts tournament.\"
cheers,Cheers,Show,Comedy,A bartender and his regulars trade jokes in a Boston pub.
";

const FIGHTERS_CSV: &str = "\
id,fighter,age,wins,losses,draws,strikes_landed_per_min_mean,takedown_accuracy_mean,lore
aldo_j,Jose Aldo,37,31,8,0,3.5,0.2,An underdog from the favelas who became a legendary champion.
diaz_n,Nick Diaz,40,26,10,0,6.5,0.1,A brawler who trained alongside his brother and never backed down from a rival.
blank_b,Blank Fighter,,,,,,,
";

const FIGHTS_CSV: &str = "\
fighter_id,opponent,date,outcome,event_name
aldo_j,Max Holloway,2017-06-03,L,UFC 212
aldo_j,Max Holloway,2017-12-02,L,UFC 218
aldo_j,Jeremy Stephens,2018-07-28,W,UFC on Fox 30
";

fn load() -> Tables {
    let tagger = KeywordTagger::shared();
    let fights = read_fights(FIGHTS_CSV.as_bytes()).unwrap();
    let fighters = read_fighters(FIGHTERS_CSV.as_bytes(), &fights, tagger).unwrap();
    let content = read_content(CONTENT_CSV.as_bytes(), tagger).unwrap();
    Tables {
        content,
        fighters,
        fights,
    }
}

#[test]
fn every_fighter_is_ranked_for_content() {
    let tables = load();
    let rocky = tables.content_by_id("rocky").unwrap();
    let ranked = rank_fighters_for_content(rocky, &tables.fighters, 10);

    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].fighter_id, "aldo_j", "underdog champion should lead for Rocky");
    for result in &ranked {
        assert!((0.0..=1.0).contains(&result.score));
    }
}

#[test]
fn fighter_watch_list_prefers_thematic_content() {
    let tables = load();
    let aldo = tables.fighter_by_id("aldo_j").unwrap();
    let ranked = rank_content_for_fighter(aldo, &tables.content, 3);
    assert_eq!(ranked[0].content_id, "rocky");
    assert_eq!(ranked.last().map(|r| r.content_id.as_str()), Some("cheers"));
}

#[test]
fn selection_ranking_and_bundles() {
    let tables = load();
    let selection: Vec<&ContentItem> = ["rocky", "warrior"]
        .iter()
        .filter_map(|id| tables.content_by_id(id))
        .collect();
    assert_eq!(selection.len(), 2);

    let ranked = aggregate_for_selection(&selection, &tables.fighters, 2);
    assert_eq!(ranked.len(), 2);
    assert!(ranked[0].score >= ranked[1].score);

    let bundles = bundles_for_selection(&selection, &tables.fighters, &tables.fights, 5);
    assert_eq!(bundles.len(), 2, "one bundle per selected title");
    assert_eq!(bundles[0].content.id, "rocky");
    assert_eq!(bundles[0].fighter.id, "aldo_j");
    assert_eq!(
        bundles[0].fight.as_ref().map(|f| f.opponent.as_str()),
        Some("Jeremy Stephens")
    );
    assert!(bundles[0].explanation.contains("Jeremy Stephens"));
}

#[test]
fn bundles_serialize_to_json() {
    let tables = load();
    let rocky = tables.content_by_id("rocky").unwrap();
    let bundles = bundles_for_selection(&[rocky], &tables.fighters, &tables.fights, 1);
    let json = serde_json::to_value(&bundles).unwrap();

    let similarity = &json[0]["similarity"];
    assert!(similarity["theme_score"].is_number());
    assert!(similarity["genre_score"].is_number());
    assert!(similarity["narrative_score"].is_number());
    assert_eq!(similarity["content_id"], "rocky");
}

#[test]
fn theme_filter_over_loaded_catalog() {
    let tables = load();
    let catalog: Vec<&ContentItem> = tables.content.iter().collect();
    let filter = CatalogFilter::new(&[], &["underdog".to_string()], &[], &[]);

    let ranked = recommend_for_filter(&catalog, &tables.fighters, &filter, 3);
    let rocky = tables.content_by_id("rocky").unwrap();
    assert_eq!(ranked, rank_fighters_for_content(rocky, &tables.fighters, 3));
    assert_eq!(ranked[0].fighter_id, "aldo_j");
}

#[test]
fn available_filters_cover_catalog_and_fighters() {
    let tables = load();
    let all = available_filters(&tables.content, &tables.fighters);

    assert!(all.genres.contains("drama"));
    assert!(all.genres.contains("comedy"));
    assert!(all.themes.contains("underdog"));
    for fighter in &tables.fighters {
        assert!(fighter.tags.themes.is_subset(&all.themes));
        assert!(fighter.tags.narratives.is_subset(&all.narratives));
    }
    for item in &tables.content {
        assert!(item.tags.genres.is_subset(&all.genres));
    }
}
