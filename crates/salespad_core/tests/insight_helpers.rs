use salespad_core::insight::lookup::{contact_display_name, deal_title, display_name};
use salespad_core::insight::pipeline::{pipeline_board, pipeline_total, stage_total};
use salespad_core::insight::search::{filter_contacts, ContactQuery, ContactSortField, SortDirection};
use salespad_core::model::deal::STAGES;
use salespad_core::{Contact, Deal};

fn contact(id: i64, first: &str, last: &str, email: &str, company: &str) -> Contact {
    Contact {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        phone: String::new(),
        company: company.to_string(),
        position: String::new(),
        notes: String::new(),
        created_at: id,
        updated_at: id,
    }
}

fn deal(id: i64, title: &str, value: f64, stage: &str) -> Deal {
    Deal {
        id,
        title: title.to_string(),
        value,
        stage: stage.to_string(),
        contact_id: None,
        probability: 50,
        expected_close_date: String::new(),
        notes: String::new(),
        created_at: id,
        updated_at: id,
    }
}

#[test]
fn display_name_trims_and_falls_back_to_unknown() {
    assert_eq!(
        display_name(&contact(1, "Ada", "Lovelace", "", "")),
        "Ada Lovelace"
    );
    assert_eq!(display_name(&contact(2, "Ada", "", "", "")), "Ada");
    assert_eq!(display_name(&contact(3, "", "", "", "")), "Unknown");
}

#[test]
fn dangling_and_absent_references_resolve_to_placeholders() {
    let contacts = vec![contact(1, "Ada", "Lovelace", "", "")];
    assert_eq!(contact_display_name(&contacts, Some(1)), "Ada Lovelace");
    assert_eq!(contact_display_name(&contacts, Some(99)), "Unknown Contact");
    assert_eq!(contact_display_name(&contacts, None), "Unknown Contact");

    let deals = vec![deal(1, "Rollout", 100.0, "prospect")];
    assert_eq!(deal_title(&deals, Some(1)), "Rollout");
    assert_eq!(deal_title(&deals, Some(99)), "Unknown Deal");
    assert_eq!(deal_title(&deals, None), "Unknown Deal");
}

#[test]
fn pipeline_board_follows_canonical_stage_order() {
    let deals = vec![
        deal(1, "a", 100.0, "closed"),
        deal(2, "b", 250.0, "prospect"),
        deal(3, "c", 50.0, "prospect"),
    ];

    let board = pipeline_board(&deals);
    let stages: Vec<&str> = board.iter().map(|column| column.stage).collect();
    assert_eq!(stages, STAGES);

    assert_eq!(board[0].deals.len(), 2);
    assert_eq!(board[0].total_value, 300.0);
    assert_eq!(board[4].deals.len(), 1);
    assert_eq!(board[4].total_value, 100.0);
}

#[test]
fn off_vocabulary_stages_count_toward_pipeline_total_but_no_column() {
    let deals = vec![
        deal(1, "a", 100.0, "prospect"),
        deal(2, "b", 999.0, "parked"),
    ];

    assert_eq!(pipeline_total(&deals), 1099.0);
    assert_eq!(stage_total(&deals, "prospect"), 100.0);

    let on_board: usize = pipeline_board(&deals)
        .iter()
        .map(|column| column.deals.len())
        .sum();
    assert_eq!(on_board, 1);
}

#[test]
fn filter_contacts_matches_name_email_and_company_case_insensitively() {
    let contacts = vec![
        contact(1, "Ada", "Lovelace", "ada@engines.co", "Analytical Engines"),
        contact(2, "Grace", "Hopper", "grace@navy.mil", "US Navy"),
        contact(3, "Tom", "Lindqvist", "tom@norrsken.se", "Norrsken Labs"),
    ];

    let by_company = filter_contacts(&contacts, &ContactQuery::with_term("ENGINES"));
    assert_eq!(by_company.len(), 1);
    assert_eq!(by_company[0].id, 1);

    let by_email = filter_contacts(&contacts, &ContactQuery::with_term("navy.mil"));
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].id, 2);

    let everyone = filter_contacts(&contacts, &ContactQuery::default());
    assert_eq!(everyone.len(), 3);
}

#[test]
fn filter_contacts_sorts_by_field_and_direction() {
    let contacts = vec![
        contact(1, "ada", "Lovelace", "", "Zeta"),
        contact(2, "Grace", "Hopper", "", "Acme"),
        contact(3, "Tom", "Lindqvist", "", "Midway"),
    ];

    let ascending = filter_contacts(&contacts, &ContactQuery::default());
    let first_names: Vec<&str> = ascending.iter().map(|c| c.first_name.as_str()).collect();
    assert_eq!(first_names, ["ada", "Grace", "Tom"]);

    let descending = filter_contacts(
        &contacts,
        &ContactQuery {
            term: String::new(),
            sort_field: ContactSortField::Company,
            direction: SortDirection::Descending,
        },
    );
    let companies: Vec<&str> = descending.iter().map(|c| c.company.as_str()).collect();
    assert_eq!(companies, ["Zeta", "Midway", "Acme"]);
}
