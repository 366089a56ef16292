//! `stack-starter features` command handler

use anyhow::Result;
use serde::Serialize;
use starter_core::Feature;
use starter_projects::plan::feature_install;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::FeaturesArgs;

#[derive(Tabled)]
struct FeatureRow {
    slug: String,
    label: String,
    installs: String,
}

#[derive(Serialize)]
struct FeatureJson {
    slug: &'static str,
    label: &'static str,
    description: &'static str,
    packages: Vec<&'static str>,
    dev: bool,
}

/// List every selectable feature and the packages it installs
pub fn run(args: FeaturesArgs) -> Result<()> {
    if args.json {
        let features: Vec<FeatureJson> = Feature::all()
            .into_iter()
            .map(|feature| {
                let install = feature_install(feature);
                FeatureJson {
                    slug: feature.slug(),
                    label: feature.label(),
                    description: feature.description(),
                    packages: install.map(|i| i.packages.to_vec()).unwrap_or_default(),
                    dev: install.is_some_and(|i| i.dev),
                }
            })
            .collect();

        println!("{}", serde_json::to_string_pretty(&features)?);
    } else {
        let rows: Vec<FeatureRow> = Feature::all()
            .into_iter()
            .map(|feature| FeatureRow {
                slug: feature.slug().to_string(),
                label: feature.label().to_string(),
                installs: installs_column(feature),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::sharp());
        println!("{}", table);
    }

    Ok(())
}

fn installs_column(feature: Feature) -> String {
    match feature_install(feature) {
        Some(install) if install.dev => format!("{} (dev)", install.packages.join(" ")),
        Some(install) => install.packages.join(" "),
        None => "(included in scaffold)".to_string(),
    }
}
