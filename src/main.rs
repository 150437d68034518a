use anyhow::Context;
use clap::Parser;
use hostel_finder::catalog::{GenderFilter, ListingFilter, RentTypeFilter};
use hostel_finder::detail::ApplyOutcome;
use hostel_finder::models::{FileRef, GenderRestriction, RentType};
use hostel_finder::payments::{PaymentMethod, PaymentSetup};
use hostel_finder::session::Credentials;
use hostel_finder::wizard::{AccountKind, OwnerSignupForm, StudentSignupForm, Wizard};
use hostel_finder::{App, AppConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hostel-finder")]
#[command(about = "Walk through the student housing marketplace and search its listings")]
#[command(version)]
struct Cli {
    /// Text matched against hostel name and city
    #[arg(short, long)]
    query: Option<String>,

    /// all, female-only, male-only or mixed
    #[arg(long, default_value = "all")]
    gender: GenderFilter,

    /// all, annual or monthly
    #[arg(long, default_value = "all")]
    rent_type: RentTypeFilter,

    /// Highest annual price to show (defaults to the configured ceiling)
    #[arg(long)]
    max_annual_price: Option<i64>,
}

impl Cli {
    /// Search filter from the flags, falling back to `defaults` for anything unset.
    fn filter(&self, defaults: ListingFilter) -> ListingFilter {
        ListingFilter {
            query: self.query.clone().unwrap_or(defaults.query),
            gender: self.gender,
            rent_type: self.rent_type,
            max_annual_price: self.max_annual_price.unwrap_or(defaults.max_annual_price),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🏠 Hostel Finder - student housing walkthrough");
    info!("==============================================");

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let mut app = App::new(config);

    // Owner journey: sign up, publish a listing
    let mut owner = Wizard::new(OwnerSignupForm::new(AccountKind::Owner));
    {
        let form = owner.form_mut();
        form.full_name = "Tunde Bakare".into();
        form.email = "tunde@homes.ng".into();
        form.password = "landlord".into();
        form.confirm_password = "landlord".into();
        form.set_region("Lagos");
        form.city = "Akoka".into();
        form.address = "4 Pedro Road".into();
        form.toggle_institution("University of Lagos (UNILAG)");
        form.attach_government_id(Some(FileRef::new("national-id.pdf")));
    }
    while owner.advance() {}
    let landing = app.complete_owner_signup(&mut owner)?;
    info!("Owner registered, landing on {}", app.navigate(&landing.path()));

    let mut listing = app.new_listing()?;
    {
        let form = listing.form_mut();
        form.name = "Lagoon View Lodge".into();
        form.set_region("Lagos");
        form.city = "Akoka".into();
        form.address = "4 Pedro Road, Akoka".into();
        form.toggle_institution("University of Lagos (UNILAG)");
        form.rent_type = RentType::Both;
        form.annual_price = 195_000;
        form.monthly_price = 19_000;
        form.available_rooms = 6;
        form.gender_restriction = GenderRestriction::MaleOnly;
        form.accepts_monthly_payment = true;
        form.toggle_amenity("WiFi");
        form.toggle_amenity("Generator");
        form.add_photos([FileRef::new("front.jpg"), FileRef::new("room.jpg")]);
    }
    while listing.advance() {}
    let (published, _) = app.publish_listing(&mut listing)?;
    let summary = app.catalog().portfolio(&published.owner_id);
    info!(
        "Published {} ({} listing(s), {} rooms open)",
        published.name, summary.listings, summary.available_rooms
    );
    app.logout();

    // Student journey: sign up, search, open a listing, apply
    let mut student = Wizard::new(StudentSignupForm::new());
    {
        let form = student.form_mut();
        form.set_region("Lagos");
        form.set_institution("University of Lagos (UNILAG)");
        form.interested_in_monthly_rent = true;
        form.full_name = "Jane Doe".into();
        form.email = "jane@x.com".into();
        form.password = "pw1".into();
        form.confirm_password = "pw1".into();
    }
    while student.advance() {}
    let landing = app.complete_student_signup(&mut student)?;
    info!("Student registered, landing on {}", app.navigate(&landing.path()));

    let filter = cli.filter(app.default_filter());
    info!(?filter, "🔍 Searching listings");
    let results = app.search(&filter);
    info!("\n✅ Found {} hostel(s)\n", results.len());

    for (i, hostel) in results.iter().enumerate() {
        println!("{}. {} (₦{} / year)", i + 1, hostel.name, hostel.annual_price);
        println!("   {}, {}", hostel.city, hostel.region);
        if let Some(monthly) = hostel.monthly_price {
            println!("   Monthly: ₦{}", monthly);
        }
        println!("   Rooms left: {}", hostel.available_rooms);
        println!("   Amenities: {}", hostel.amenities.join(", "));
        println!();
    }

    if let Some(first) = results.first() {
        let route = app.navigate(&format!("/hostel/{}", first.id));
        let mut detail = app.open_listing(&first.id)?;
        detail.set_monthly_interest(true);
        match detail.apply() {
            ApplyOutcome::PaymentSetup(next) => {
                info!("{} → {}", route, app.navigate(&next.path()));
                let mut payment = PaymentSetup::new();
                payment.select(PaymentMethod::Card);
                payment.confirm()?;
            }
            ApplyOutcome::ApplicationModal => {
                info!("Application submitted for {}", detail.hostel().name)
            }
        }
    } else {
        warn!("No hostels matched the search");
    }

    if let Some(path) = app.config().export_path.clone() {
        let json = serde_json::to_string_pretty(&results)?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("💾 Saved search results to {}", path.display());
    }

    let route = app
        .login(Credentials::new("student.returning@uni.ng", "pw"))
        .await?;
    info!("Returning student signed in, landing on {}", route);

    Ok(())
}
