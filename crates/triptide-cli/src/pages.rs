//! Page command handlers. Each prints the containers its page filled.

use triptide_core::FilterCriteria;
use triptide_store::ProfileStore;
use triptide_web::{
    AdminPage, BookingPage, DestinationPage, ExplorePage, HomePage, PageView, PlannerPage,
    PlannerStatus, Slideshow, SurveyForm, AUTO_ADVANCE,
};

use crate::Context;

fn print_view(view: &PageView) {
    print!("{}", view.render());
}

pub(crate) async fn run_home(ctx: &Context) -> anyhow::Result<()> {
    print_view(&HomePage::load(&ctx.client).await);
    Ok(())
}

pub(crate) async fn run_explore(ctx: &Context, criteria: &FilterCriteria) -> anyhow::Result<()> {
    let profile = ProfileStore::new(ctx.storage.clone());
    let page = ExplorePage::load(&ctx.client, &profile).await;
    let view = page.render(criteria);
    tracing::info!(
        total = page.stays().len(),
        shown = page.filtered(criteria).len(),
        "explore rendered"
    );
    print_view(&view);
    Ok(())
}

pub(crate) async fn run_destination(
    ctx: &Context,
    place: &str,
    criteria: &FilterCriteria,
) -> anyhow::Result<()> {
    let page = DestinationPage::load(&ctx.client, place).await;
    print_view(&page.render(criteria));
    Ok(())
}

pub(crate) async fn run_similar(
    ctx: &Context,
    destination: &str,
    from_explore: bool,
) -> anyhow::Result<()> {
    if from_explore {
        ExplorePage::record_stay_click(&ProfileStore::new(ctx.storage.clone()));
    }
    let page = BookingPage::new(destination, "");
    print_view(&page.load(&ctx.client).await);
    Ok(())
}

pub(crate) async fn run_survey(ctx: &Context, raw: [u8; 5]) -> anyhow::Result<()> {
    let answers = raw.map(|a| (a != 0).then_some(a));
    let profile = ProfileStore::new(ctx.storage.clone());
    let mut form = SurveyForm::new();

    match form.submit(&answers, &ctx.client, &profile).await {
        Ok(report) => {
            if let Some(score) = report.sus_score {
                tracing::info!(sus = score, "SUS score submitted");
            }
            if let Some(message) = form.status_message() {
                println!("{message}");
            }
            Ok(())
        }
        Err(prompt) => anyhow::bail!(prompt),
    }
}

pub(crate) async fn run_admin(ctx: &Context) -> anyhow::Result<()> {
    print_view(&AdminPage::load(&ctx.client).await);
    Ok(())
}

pub(crate) async fn run_onboarding(slides: usize, start: usize, ticks: u32) -> anyhow::Result<()> {
    let mut show = Slideshow::new(slides);
    show.show(start);
    print_view(&show.render());
    for _ in 0..ticks {
        tokio::time::sleep(AUTO_ADVANCE).await;
        show.advance();
        print_view(&show.render());
    }
    Ok(())
}

pub(crate) async fn run_plan(
    ctx: &Context,
    destination: String,
    days: String,
    traveler_type: String,
    interests: String,
) -> anyhow::Result<()> {
    let form = PlannerPage {
        destination,
        days,
        traveler_type,
        interests,
    };
    eprint!("{}", PlannerPage::pending().render());
    match form.generate(&ctx.client).await {
        PlannerStatus::Done(view) => {
            print_view(&view);
            Ok(())
        }
        PlannerStatus::Rejected(prompt) => anyhow::bail!(prompt),
    }
}
