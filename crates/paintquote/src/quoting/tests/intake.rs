use std::io::Cursor;

use crate::quoting::domain::{
    CoatSelection, ColorChange, Condition, Furnishing, MaterialProvider, Quality, Scope,
    Substrate, WallpaperAction, Zone, DEFAULT_CEILING_HEIGHT_M,
};
use crate::quoting::intake::{QuoteImportError, QuoteRequestImporter};

const HEADER: &str = "Reference,Walls m2,Ceiling m2,Ceiling Height m,Scope,Zone,Substrate,Wallpaper Action,Condition,Furnishing,Color Change,Coats,Quality,Material Provided By,ROT,ROT Percent\n";

fn import(rows: &str) -> Result<Vec<crate::quoting::intake::ImportedQuoteRequest>, QuoteImportError>
{
    let csv = format!("{HEADER}{rows}");
    QuoteRequestImporter::from_reader(Cursor::new(csv.into_bytes()))
}

#[test]
fn imports_a_fully_specified_row() {
    let imported = import(
        "Lindqvist kitchen,32.5,12,2.7,walls_and_ceiling,zone_b,wallpaper,remove_wallpaper,bad,full,dark_to_light,3,premium,painter,yes,0.3\n",
    )
    .expect("import succeeds");

    assert_eq!(imported.len(), 1);
    let entry = &imported[0];
    assert_eq!(entry.reference, "Lindqvist kitchen");
    let request = &entry.request;
    assert_eq!(request.walls_area_m2, 32.5);
    assert_eq!(request.ceiling_area_m2, 12.0);
    assert_eq!(request.ceiling_height_m, 2.7);
    assert_eq!(request.scope, Scope::WallsAndCeiling);
    assert_eq!(request.zone, Zone::B);
    assert_eq!(request.substrate, Substrate::Wallpaper);
    assert_eq!(request.wallpaper_action, WallpaperAction::RemoveWallpaper);
    assert_eq!(request.condition, Condition::Bad);
    assert_eq!(request.furnishing, Furnishing::Full);
    assert_eq!(request.color_change, ColorChange::DarkToLight);
    assert_eq!(request.coats, CoatSelection::Three);
    assert_eq!(request.quality, Quality::Premium);
    assert_eq!(request.material_provided_by, MaterialProvider::Painter);
    assert!(request.rot_enabled);
    assert_eq!(request.rot_percent, 0.3);
}

#[test]
fn cells_are_normalized_before_matching() {
    let imported = import(
        "Messy,20,,,Walls And Ceiling,Zone A,Painted Wall,,Good,Half Furnished,Light To Light,,Standard,Painter,No,\n",
    )
    .expect("import succeeds");

    let request = &imported[0].request;
    assert_eq!(request.scope, Scope::WallsAndCeiling);
    assert_eq!(request.zone, Zone::A);
    assert_eq!(request.substrate, Substrate::PaintedWall);
    assert_eq!(request.condition, Condition::Good);
}

#[test]
fn blank_optional_cells_fall_back_to_form_defaults() {
    let imported = import(
        ",20,,,walls,a,wallpaper,,normal,half_furnished,light_to_light,,standard,painter,,\n",
    )
    .expect("import succeeds");

    let entry = &imported[0];
    assert_eq!(entry.reference, "row-2");
    let request = &entry.request;
    assert_eq!(request.ceiling_height_m, DEFAULT_CEILING_HEIGHT_M);
    assert_eq!(request.wallpaper_action, WallpaperAction::PaintOver);
    assert_eq!(request.coats, CoatSelection::Auto);
    assert!(!request.rot_enabled);
    assert_eq!(request.rot_percent, 0.0);
}

#[test]
fn unknown_categorical_token_fails_with_the_line_number() {
    let error = import(
        "First,20,,,walls,a,painted_wall,,normal,half_furnished,light_to_light,,standard,painter,,\nSecond,20,,,walls,a,granite,,normal,half_furnished,light_to_light,,standard,painter,,\n",
    )
    .expect_err("import fails");

    match error {
        QuoteImportError::Field { line, column, source } => {
            assert_eq!(line, 3);
            assert_eq!(column, "Substrate");
            assert_eq!(source.value, "granite");
        }
        other => panic!("expected field error, got {other:?}"),
    }
}

#[test]
fn unusable_rot_percent_fails_with_the_line_number() {
    let error = import(
        "Bad percent,20,,,walls,a,painted_wall,,normal,half_furnished,light_to_light,,standard,painter,yes,lots\n",
    )
    .expect_err("import fails");

    match error {
        QuoteImportError::Number { line, column, value } => {
            assert_eq!(line, 2);
            assert_eq!(column, "ROT Percent");
            assert_eq!(value, "lots");
        }
        other => panic!("expected number error, got {other:?}"),
    }
}

#[test]
fn imported_rot_percent_is_clamped_to_the_cap() {
    let imported = import(
        "Over cap,20,,,walls,a,painted_wall,,normal,half_furnished,light_to_light,,standard,painter,yes,0.9\n",
    )
    .expect("import succeeds");

    assert_eq!(imported[0].request.rot_percent, 0.30);
}

#[test]
fn unreadable_measurement_cells_count_as_zero() {
    let imported = import(
        "Lenient,not a number,,,walls,a,painted_wall,,normal,half_furnished,light_to_light,,standard,painter,,\n",
    )
    .expect("import succeeds");

    assert_eq!(imported[0].request.walls_area_m2, 0.0);
}

#[test]
fn missing_required_column_is_a_csv_error() {
    let csv = "Reference,Walls m2\nJob,20\n";
    let error = QuoteRequestImporter::from_reader(Cursor::new(csv.as_bytes().to_vec()))
        .expect_err("import fails");
    assert!(matches!(error, QuoteImportError::Csv(_)));
}
