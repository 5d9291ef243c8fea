use gildedrose_fixture::{
    FixtureError, ReportFormat, default_inventory, load_inventory, render, render_text, simulate,
};

const TWO_DAYS: &str = "\
OMGHAI!
-------- day 0 --------
name, sellIn, quality
+5 Dexterity Vest, 10, 20
Aged Brie, 2, 0
Elixir of the Mongoose, 5, 7
Sulfuras, Hand of Ragnaros, 0, 80
Sulfuras, Hand of Ragnaros, -1, 80
Backstage passes to a TAFKAL80ETC concert, 15, 20
Backstage passes to a TAFKAL80ETC concert, 10, 49
Backstage passes to a TAFKAL80ETC concert, 5, 49
Conjured Mana Cake, 3, 6

-------- day 1 --------
name, sellIn, quality
+5 Dexterity Vest, 9, 19
Aged Brie, 1, 1
Elixir of the Mongoose, 4, 6
Sulfuras, Hand of Ragnaros, 0, 80
Sulfuras, Hand of Ragnaros, -1, 80
Backstage passes to a TAFKAL80ETC concert, 14, 21
Backstage passes to a TAFKAL80ETC concert, 9, 50
Backstage passes to a TAFKAL80ETC concert, 4, 50
Conjured Mana Cake, 2, 4

-------- day 2 --------
name, sellIn, quality
+5 Dexterity Vest, 8, 18
Aged Brie, 0, 2
Elixir of the Mongoose, 3, 5
Sulfuras, Hand of Ragnaros, 0, 80
Sulfuras, Hand of Ragnaros, -1, 80
Backstage passes to a TAFKAL80ETC concert, 13, 22
Backstage passes to a TAFKAL80ETC concert, 8, 50
Backstage passes to a TAFKAL80ETC concert, 3, 50
Conjured Mana Cake, 1, 2

";

#[test]
fn default_inventory_two_day_report_matches_golden_text() {
    let simulation = simulate(default_inventory(), 2);
    assert_eq!(render_text(&simulation), TWO_DAYS);
    assert_eq!(render(&simulation, ReportFormat::Text).unwrap(), TWO_DAYS);
}

#[test]
fn default_inventory_after_thirty_days() {
    let simulation = simulate(default_inventory(), 30);
    let finals: Vec<String> = simulation
        .final_state()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        finals,
        vec![
            "+5 Dexterity Vest, -20, 0",
            "Aged Brie, -28, 50",
            "Elixir of the Mongoose, -25, 0",
            "Sulfuras, Hand of Ragnaros, 0, 80",
            "Sulfuras, Hand of Ragnaros, -1, 80",
            "Backstage passes to a TAFKAL80ETC concert, -15, 0",
            "Backstage passes to a TAFKAL80ETC concert, -20, 0",
            "Backstage passes to a TAFKAL80ETC concert, -25, 0",
            "Conjured Mana Cake, -27, 0",
        ]
    );
}

#[test]
fn inventory_file_round_trips_through_simulation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    std::fs::write(
        &path,
        r#"[
            { "name": "Backstage passes to a TAFKAL80ETC concert", "sell_in": 1, "quality": 40 },
            { "name": "Conjured Mana Cake", "sell_in": 1, "quality": 9 }
        ]"#,
    )
    .unwrap();

    let items = load_inventory(&path).unwrap();
    let simulation = simulate(items, 2);
    let finals: Vec<(i32, i32)> = simulation
        .final_state()
        .iter()
        .map(|i| (i.sell_in(), i.quality()))
        .collect();
    // Pass: 43 on the last day before the concert, worthless after it.
    // Cake: -2 then -4 once expired.
    assert_eq!(finals, vec![(-1, 0), (-1, 3)]);
}

#[test]
fn malformed_inventory_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    std::fs::write(&path, r#"[{ "name": "Aged Brie", "sell_in": "soon" }]"#).unwrap();

    let err = load_inventory(&path).unwrap_err();
    assert!(matches!(err, FixtureError::Parse { .. }));
}
