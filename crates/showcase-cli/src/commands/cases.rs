use super::utils::{parse_industry, parse_role, print_case_detail, print_case_row, seeded_repository};
use anyhow::{Result, bail};
use colored::Colorize;
use showcase_core::case::{CaseFilter, FACET_ALL, Industry, Role};
use strum::IntoEnumIterator;

pub fn list(role: &str, industry: &str, query: &str) -> Result<()> {
    let filter = CaseFilter::new(parse_role(role)?, parse_industry(industry)?, query);
    let cases = filter.apply(&seeded_repository().list_all());

    if cases.is_empty() {
        println!("{}", "No cases match the current filter.".bright_black());
        return Ok(());
    }
    for case in &cases {
        print_case_row(case);
    }
    Ok(())
}

pub fn show(id: &str) -> Result<()> {
    let Some(case) = seeded_repository().find_by_id(id) else {
        bail!("No case with id '{id}'");
    };
    print_case_detail(&case);
    Ok(())
}

pub fn print_facets() {
    println!("{}", "Roles:".bold());
    println!("  {FACET_ALL}");
    for role in Role::iter() {
        println!("  {} {} {}", role, role.icon(), role.label().bright_black());
    }
    println!("{}", "Industries:".bold());
    println!("  {FACET_ALL}");
    for industry in Industry::iter() {
        println!(
            "  {} {} {}",
            industry,
            industry.icon(),
            industry.label().bright_black()
        );
    }
}
