use crate::infra::{parse_building_type, parse_standard, read_json};
use chrono::Local;
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use ultracertify::certification::report::views::CriterionView;
use ultracertify::certification::{
    render_text, write_csv, BuildingType, CertificationReport, CertificationService,
    EvidenceDescriptor, EvidenceLedger, ProjectDraft, ProjectProfile, ReportRequest,
    ScoreRequest, ScoreResponse, Standard,
};
use ultracertify::config::{AppConfig, CertificationConfig};
use ultracertify::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct CriteriaArgs {
    /// Certification standard (NEST or NEST_PLUS)
    #[arg(long, value_parser = parse_standard)]
    pub(crate) standard: Standard,
    /// Building type (New or Existing)
    #[arg(long, value_parser = parse_building_type)]
    pub(crate) building_type: BuildingType,
}

#[derive(Args, Debug)]
pub(crate) struct DraftInitArgs {
    /// Certification standard (NEST or NEST_PLUS)
    #[arg(long, value_parser = parse_standard)]
    pub(crate) standard: Standard,
    /// Building type (New or Existing)
    #[arg(long, value_parser = parse_building_type)]
    pub(crate) building_type: BuildingType,
    /// Where to write the draft JSON
    #[arg(long)]
    pub(crate) out: PathBuf,
    /// Replace an existing file at the output path
    #[arg(long)]
    pub(crate) force: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Draft JSON produced by `draft init` or a client
    #[arg(long)]
    pub(crate) draft: PathBuf,
    /// Optional evidence ledger JSON (criterion id -> files)
    #[arg(long)]
    pub(crate) evidence: Option<PathBuf>,
    /// Print the scorecard as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Draft JSON produced by `draft init` or a client
    #[arg(long)]
    pub(crate) draft: PathBuf,
    /// Optional project profile JSON printed in the report header
    #[arg(long)]
    pub(crate) project: Option<PathBuf>,
    /// Optional evidence ledger JSON (criterion id -> files)
    #[arg(long)]
    pub(crate) evidence: Option<PathBuf>,
    /// Also export one CSV row per report section to this path
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Building type for the sample project
    #[arg(long, value_parser = parse_building_type, default_value = "New")]
    pub(crate) building_type: BuildingType,
}

pub(crate) fn run_criteria(args: CriteriaArgs) -> Result<(), AppError> {
    let service = CertificationService::default();
    let criteria = service.criteria(args.standard, args.building_type)?;
    let max_score = service
        .engine()
        .catalog()
        .program(args.standard, args.building_type)?
        .max_score();

    println!(
        "{} / {} buildings: {} criteria, {} points available",
        args.standard.label(),
        args.building_type,
        criteria.len(),
        max_score
    );
    for criterion in &criteria {
        render_criterion(criterion);
    }
    Ok(())
}

fn render_criterion(criterion: &CriterionView) {
    println!(
        "- [{}] {} ({}, max {} pts)",
        criterion.id, criterion.name, criterion.kind_label, criterion.max_points
    );
    for option in &criterion.options {
        println!("    * {} ({} pts)", option.label, option.points);
    }
}

pub(crate) fn run_draft_init(args: DraftInitArgs) -> Result<(), AppError> {
    if args.out.exists() && !args.force {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!(
                "{} already exists; pass --force to replace it",
                args.out.display()
            ),
        )));
    }

    let draft = ProjectDraft::new(args.standard, args.building_type);
    draft.save(&args.out)?;
    println!(
        "Created {} draft for {} buildings at {}",
        args.standard.label(),
        args.building_type,
        args.out.display()
    );
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let service = service_from_env();
    let draft = ProjectDraft::load(&args.draft)?;
    let evidence = load_evidence(args.evidence)?;

    let response = service.score(&ScoreRequest::from_draft(&draft, evidence))?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        render_score(&draft, &response);
    }
    Ok(())
}

fn render_score(draft: &ProjectDraft, response: &ScoreResponse) {
    let scorecard = &response.scorecard;
    println!(
        "{} / {} buildings",
        draft.standard.label(),
        draft.building_type
    );
    println!(
        "- Score {} / {} ({:.0}%)",
        scorecard.total_score,
        scorecard.max_score,
        scorecard.progress_pct()
    );
    println!(
        "- Tier: {} ({})",
        scorecard.tier.label(),
        scorecard.tier.color
    );
    if let Some(gap) = &scorecard.next_tier {
        println!(
            "- {} more point(s) to reach {}",
            gap.points_needed,
            gap.tier.label()
        );
    }
    for award in scorecard.awards.iter().filter(|award| award.awarded > 0) {
        println!(
            "  - {}: {} / {}",
            award.criterion_id, award.awarded, award.max_points
        );
    }
    if !scorecard.orphaned_selections.is_empty() {
        println!(
            "Ignored selections outside this program: {}",
            scorecard.orphaned_selections.join(", ")
        );
    }
    if !response.withheld_for_evidence.is_empty() {
        println!(
            "Not counted without evidence: {}",
            response.withheld_for_evidence.join(", ")
        );
    }
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let service = service_from_env();
    let draft = ProjectDraft::load(&args.draft)?;
    let evidence = load_evidence(args.evidence)?;
    let project = args
        .project
        .map(|path| read_json::<ProjectProfile>(&path))
        .transpose()?;

    let request = ReportRequest {
        scoring: ScoreRequest::from_draft(&draft, evidence),
        project,
        generated_on: None,
    };
    let report = service.report(&request, Local::now().date_naive())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    if let Some(path) = args.csv {
        export_csv(&report, &path)?;
        println!("\nCSV export written to {}", path.display());
    }
    Ok(())
}

fn export_csv(report: &CertificationReport, path: &Path) -> Result<(), AppError> {
    let file = File::create(path)?;
    write_csv(report, BufWriter::new(file))?;
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = service_from_env();

    println!("UltraCertify demo");
    let (draft, evidence) = demo_project(args.building_type);
    let response = service.score(&ScoreRequest::from_draft(&draft, evidence.clone()))?;
    render_score(&draft, &response);

    let request = ReportRequest {
        scoring: ScoreRequest::from_draft(&draft, evidence),
        project: Some(demo_profile()),
        generated_on: None,
    };
    let report = service.report(&request, Local::now().date_naive())?;
    println!();
    print!("{}", render_text(&report));
    Ok(())
}

fn service_from_env() -> CertificationService {
    let certification = match AppConfig::load() {
        Ok(config) => config.certification,
        Err(err) => {
            tracing::warn!(%err, "falling back to default certification settings");
            CertificationConfig::default()
        }
    };
    CertificationService::from_config(&certification)
}

fn load_evidence(path: Option<PathBuf>) -> Result<EvidenceLedger, AppError> {
    match path {
        Some(path) => read_json(&path),
        None => Ok(EvidenceLedger::new()),
    }
}

fn demo_project(building_type: BuildingType) -> (ProjectDraft, EvidenceLedger) {
    let mut draft = ProjectDraft::new(Standard::NestPlus, building_type);
    let selections = &mut draft.selections;
    selections.set_achieved("np-basic-amenities", true);
    selections.set_achieved("np-indoor-plants", true);
    selections.set_achieved("np-top-soil-preservation", true);
    selections.set_achieved("np-sun-shades", true);
    selections.set_achieved("np-ev-charging", true);
    selections.select_option("np-passive-architecture-features", "Two Features");
    selections.select_option("np-vegetation-natural-topography", "75 sq.ft");
    selections.select_option("np-renewable-energy", "1.5 kW");
    selections.select_option("np-daylighting", "75% of areas");
    selections.select_option("np-ventilation", "10% of carpet area");
    selections.select_option("np-green-procurement", "2 Credits");
    for label in ["Dual flush cistern", "Tap with aerators", "Showers with aerators"] {
        selections.toggle_option("np-water-saving-fixtures", label, true);
    }
    for label in ["Water Metering", "Automatic water level controllers"] {
        selections.toggle_option("np-water-metering-controllers", label, true);
    }
    for label in ["LED lights", "3 Star Energy efficient fans"] {
        selections.toggle_option("np-energy-efficient-appliances", label, true);
    }
    for label in ["Opening provision", "Exhaust Fan"] {
        selections.toggle_option("np-exhaust-system", label, true);
    }
    for label in ["Living room/Kitchen", "Room 1"] {
        selections.toggle_option("np-cross-ventilation", label, true);
    }

    let mut evidence = EvidenceLedger::new();
    evidence.attach(
        "np-waste-segregation",
        EvidenceDescriptor::new("segregation-bins.jpg")
            .with_description("Dry and wet waste bins at the entrance"),
    );
    evidence.attach(
        "np-renewable-energy",
        EvidenceDescriptor::new("rooftop-solar.png").with_location(12.97194, 77.59369),
    );
    evidence.attach("np-renewable-energy", EvidenceDescriptor::new("invoice.pdf"));

    (draft, evidence)
}

fn demo_profile() -> ProjectProfile {
    ProjectProfile {
        registration_number: "IGBC-NP-2025-0142".to_string(),
        owner_name: "Meera Iyer".to_string(),
        mobile_number: "+91 98860 12345".to_string(),
        email_address: "meera.iyer@example.in".to_string(),
        project_location: "Bengaluru".to_string(),
        full_address: "21 Cubbon Park Road, Bengaluru 560001".to_string(),
        permission_authority: "BBMP".to_string(),
        project_type: "Residential Building".to_string(),
        number_of_floors: 3,
        total_site_area: 220.0,
        total_built_up_area: 385.0,
        landscape_area: 32.5,
        two_wheeler_parking: 2,
    }
}
