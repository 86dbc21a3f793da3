use crate::error::AppError;
use crate::infra::{
    parse_coats, parse_color_change, parse_condition, parse_furnishing, parse_material_provider,
    parse_quality, parse_rot_percent, parse_scope, parse_substrate, parse_wallpaper_action,
    parse_zone,
};
use clap::Args;
use paintquote::config::AppConfig;
use paintquote::leads::LeadRequest;
use paintquote::quoting::report::format_kronor;
use paintquote::quoting::{
    CoatSelection, ColorChange, Condition, Furnishing, MaterialProvider, MeasurementPlan, Quality,
    QuoteBreakdown, QuoteEngine, QuoteRequest, QuoteRequestImporter, Room, RoomSection, Scope,
    Substrate, WallpaperAction, Zone,
};
use std::io::Cursor;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Painted wall area in m²
    #[arg(long)]
    walls_area_m2: f64,
    /// Painted ceiling area in m², priced only when scope includes the ceiling
    #[arg(long, default_value_t = 0.0)]
    ceiling_area_m2: f64,
    /// Ceiling height in meters
    #[arg(long, default_value_t = 2.4)]
    ceiling_height_m: f64,
    /// walls | walls_and_ceiling
    #[arg(long, value_parser = parse_scope)]
    scope: Scope,
    /// a | b | c
    #[arg(long, value_parser = parse_zone)]
    zone: Zone,
    /// painted_wall | wallpaper | concrete_or_brick | wood_panel
    #[arg(long, value_parser = parse_substrate)]
    substrate: Substrate,
    /// paint_over | remove_wallpaper (only used for wallpaper)
    #[arg(long, value_parser = parse_wallpaper_action, default_value = "paint_over")]
    wallpaper_action: WallpaperAction,
    /// good | normal | bad
    #[arg(long, value_parser = parse_condition)]
    condition: Condition,
    /// empty | half_furnished | full
    #[arg(long, value_parser = parse_furnishing)]
    furnishing: Furnishing,
    /// light_to_light | dark_to_light | light_to_dark | refresh
    #[arg(long, value_parser = parse_color_change)]
    color_change: ColorChange,
    /// auto | 1 | 2 | 3
    #[arg(long, value_parser = parse_coats, default_value = "auto")]
    coats: CoatSelection,
    /// budget | standard | premium
    #[arg(long, value_parser = parse_quality)]
    quality: Quality,
    /// painter | customer
    #[arg(long, value_parser = parse_material_provider, default_value = "painter")]
    material_provided_by: MaterialProvider,
    /// Apply the ROT labor deduction
    #[arg(long)]
    rot: bool,
    /// ROT deduction as a fraction of labor, capped at 0.30
    #[arg(long, value_parser = parse_rot_percent, default_value_t = 0.30)]
    rot_percent: f64,
}

impl QuoteArgs {
    fn into_request(self) -> QuoteRequest {
        QuoteRequest {
            walls_area_m2: self.walls_area_m2,
            ceiling_area_m2: self.ceiling_area_m2,
            ceiling_height_m: self.ceiling_height_m,
            scope: self.scope,
            zone: self.zone,
            substrate: self.substrate,
            wallpaper_action: self.wallpaper_action,
            condition: self.condition,
            furnishing: self.furnishing,
            color_change: self.color_change,
            coats: self.coats,
            quality: self.quality,
            material_provided_by: self.material_provided_by,
            rot_enabled: self.rot,
            rot_percent: self.rot_percent,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with one quote request per row
    #[arg(long)]
    file: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the craftsman lead portion of the walkthrough
    #[arg(long)]
    skip_lead: bool,
}

pub(crate) fn run_quote_calculate(args: QuoteArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = QuoteEngine::new(config.pricing);
    let breakdown = engine.quote(&args.into_request());
    render_breakdown("Quote", &breakdown);
    Ok(())
}

pub(crate) fn run_quote_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = QuoteEngine::new(config.pricing);
    let imported = QuoteRequestImporter::from_path(&args.file)?;

    println!(
        "{:<24} {:>9} {:>6} {:>13} {:>13}",
        "Reference", "Area m²", "Coats", "Before ROT", "After ROT"
    );
    for entry in &imported {
        let breakdown = engine.quote(&entry.request);
        println!(
            "{:<24} {:>9} {:>6} {:>13} {:>13}",
            entry.reference,
            breakdown.total_area_m2,
            breakdown.coats,
            format_kronor(breakdown.total_before_rot),
            format_kronor(breakdown.total_after_rot),
        );
    }
    println!();
    println!("{} request(s) priced", imported.len());
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = QuoteEngine::new(config.pricing);

    println!("== Room measurement ==");
    let plan = MeasurementPlan {
        rooms: vec![
            Room {
                label: "Living room".to_string(),
                sections: vec![
                    RoomSection::from_raw("Wall 1", "5", "2.4"),
                    RoomSection::from_raw("Wall 2", "4", "2.4"),
                ],
            },
            Room {
                label: "Bedroom".to_string(),
                sections: vec![RoomSection::from_raw("Wall 1", "3,5", "2.4")],
            },
        ],
    };
    for room in &plan.rooms {
        println!("  {:<14} {:>8.1} m²", room.label, room.area_m2());
    }
    println!("  {:<14} {:>8.1} m²", "Total", plan.total_area_m2());
    println!();

    println!("== Quote ==");
    let request = QuoteRequest {
        walls_area_m2: plan.total_area_m2(),
        ceiling_area_m2: 0.0,
        ceiling_height_m: 2.7,
        scope: Scope::Walls,
        zone: Zone::A,
        substrate: Substrate::PaintedWall,
        wallpaper_action: WallpaperAction::PaintOver,
        condition: Condition::Normal,
        furnishing: Furnishing::HalfFurnished,
        color_change: ColorChange::DarkToLight,
        coats: CoatSelection::Auto,
        quality: Quality::Standard,
        material_provided_by: MaterialProvider::Painter,
        rot_enabled: true,
        rot_percent: 0.30,
    };
    let breakdown = engine.quote(&request);
    render_breakdown("Sample living area repaint", &breakdown);
    println!();

    println!("== Batch intake ==");
    let csv = "\
Reference,Walls m2,Ceiling m2,Ceiling Height m,Scope,Zone,Substrate,Wallpaper Action,Condition,Furnishing,Color Change,Coats,Quality,Material Provided By,ROT,ROT Percent
Apartment,20,,,walls,a,painted_wall,,normal,half_furnished,light_to_light,,standard,painter,,
Townhouse,40,15,2.7,walls_and_ceiling,c,wallpaper,remove_wallpaper,bad,full,dark_to_light,,premium,painter,yes,0.3
";
    let imported = QuoteRequestImporter::from_reader(Cursor::new(csv.as_bytes().to_vec()))?;
    for entry in &imported {
        let breakdown = engine.quote(&entry.request);
        println!(
            "  {:<12} {:>13} before ROT, {:>13} after",
            entry.reference,
            format_kronor(breakdown.total_before_rot),
            format_kronor(breakdown.total_after_rot),
        );
    }

    if !args.skip_lead {
        println!();
        println!("== Craftsman lead ==");
        let lead = LeadRequest {
            first_name: "Anna".to_string(),
            last_name: "Lind".to_string(),
            email: "anna.lind@example.com".to_string(),
            phone: "+46 70 123 45 67".to_string(),
            city: "Uppsala".to_string(),
            project_description: "Repaint living room and bedroom".to_string(),
            ..LeadRequest::default()
        };
        match lead.validate() {
            Ok(()) => println!("  lead from {} accepted for follow-up", lead.full_name()),
            Err(missing) => println!("  lead rejected: {missing}"),
        }
    }

    Ok(())
}

fn render_breakdown(title: &str, breakdown: &QuoteBreakdown) {
    println!("{title}");
    for line in breakdown.summary().lines {
        println!("  {:<26} {:>14}", line.label, line.value);
    }
    println!();
    println!("  Applied factors");
    for component in &breakdown.factors {
        println!(
            "    {:<16} {:>6.3}  {}",
            component.kind.label(),
            component.value,
            component.notes
        );
    }
}
