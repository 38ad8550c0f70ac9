//! # Fetch — Refresh the curated country dataset.
//!
//! Applies the maintained Singapore curation (MAS regulations, Project
//! Guardian whitepapers, consultation papers, compliance requirements) to the
//! dataset, stamps the jurisdictions covered by the periodic refresh, and
//! regenerates both `countries.json` and the per-country files under
//! `data/countries/`.
//!
//! ## Usage
//!
//! ```bash
//! regatlas fetch
//! regatlas fetch --data-dir /srv/atlas/data
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use regatlas_core::metadata::today;
use regatlas_core::{
    CountryCode, CountryDataset, CountryRecord, LegalFrameworkItem, Paper, Regulation, SourceLink,
};

use crate::{countries_path, load_dataset, save_dataset};

/// Fetch subcommand arguments.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Skip writing per-country files under `<data-dir>/countries/`.
    #[arg(long)]
    pub no_country_files: bool,
}

/// Jurisdictions refreshed by the periodic run. Singapore gets the full
/// curated record; the rest only receive a refresh stamp until their
/// regulator adapters are curated too.
const STAMPED_CODES: [&str; 3] = ["US", "GB", "CH"];

/// Execute the fetch subcommand.
pub fn run_fetch(args: &FetchArgs, data_dir: &Path) -> Result<u8> {
    let mut dataset = load_dataset(data_dir)
        .with_context(|| format!("loading dataset from {}", countries_path(data_dir).display()))?;

    refresh_dataset(&mut dataset);

    save_dataset(data_dir, &dataset)
        .with_context(|| format!("writing {}", countries_path(data_dir).display()))?;
    tracing::info!(countries = dataset.len(), "saved dataset");

    if !args.no_country_files {
        write_country_files(data_dir, &dataset)?;
    }

    println!("Refreshed {} jurisdictions", dataset.len());
    Ok(0)
}

/// Apply the curated Singapore record and stamp the other refreshed
/// jurisdictions in place.
pub fn refresh_dataset(dataset: &mut CountryDataset) {
    if let Ok(sg) = CountryCode::new("SG") {
        dataset.upsert(sg, curated_singapore());
        tracing::info!("applied curated Singapore record");
    }

    let stamp = today();
    for code in STAMPED_CODES {
        let Ok(code) = CountryCode::new(code) else {
            continue;
        };
        match dataset.get_mut(&code) {
            Some(record) => {
                record.last_updated = Some(stamp.clone());
                record.auto_fetched = true;
                tracing::debug!(code = %code, "stamped record");
            }
            None => tracing::warn!(code = %code, "no existing record to stamp"),
        }
    }
}

/// Write one JSON document per jurisdiction under `<data-dir>/countries/`.
fn write_country_files(data_dir: &Path, dataset: &CountryDataset) -> Result<()> {
    let countries_dir = data_dir.join("countries");
    std::fs::create_dir_all(&countries_dir)
        .with_context(|| format!("creating {}", countries_dir.display()))?;

    for (code, record) in dataset.iter() {
        let path = countries_dir.join(format!("{}.json", code.as_str()));
        let json = serde_json::to_string_pretty(record)?;
        std::fs::write(&path, json + "\n")
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote country file");
    }
    Ok(())
}

// ─── Curated Content ─────────────────────────────────────────────────────────

/// The maintained Singapore record: MAS framework, core statutes, whitepapers,
/// consultation papers, compliance requirements, and sources.
pub fn curated_singapore() -> CountryRecord {
    CountryRecord {
        overview: Some(
            "Singapore has established a comprehensive and progressive regulatory framework \
             for tokenization through the Monetary Authority of Singapore (MAS). The Payment \
             Services Act (PSA) 2019 regulates digital payment tokens, while securities tokens \
             fall under the Securities and Futures Act (SFA). MAS has issued extensive \
             guidelines, consultation papers, and whitepapers to provide clarity on \
             tokenization, including the Project Guardian initiative for asset tokenization \
             and DeFi applications."
                .to_string(),
        ),
        regulations: vec![
            Regulation {
                title: "Payment Services Act (PSA) 2019".to_string(),
                description: "Comprehensive framework governing digital payment token (DPT) \
                              services including exchanges, wallet providers, and payment token \
                              issuers. Requires licensing for DPT service providers."
                    .to_string(),
                effective_date: Some("2020-01-28".to_string()),
                reference: Some("Act 2 of 2019".to_string()),
            },
            Regulation {
                title: "Securities and Futures Act (SFA)".to_string(),
                description: "Applies to tokens that constitute capital markets products, \
                              including securities or derivatives. Governs the offer, sale, and \
                              trading of security tokens."
                    .to_string(),
                effective_date: None,
                reference: Some("Chapter 289".to_string()),
            },
            Regulation {
                title: "MAS Notice PSN01 on Prevention of Money Laundering and Countering the \
                        Financing of Terrorism"
                    .to_string(),
                description: "Specific AML/CFT requirements for digital payment token service \
                              providers under the PSA"
                    .to_string(),
                effective_date: Some("2020-01-28".to_string()),
                reference: None,
            },
            Regulation {
                title: "MAS Guidelines on Digital Token Offerings".to_string(),
                description: "Provides guidance on the application of securities laws to digital \
                              token offerings, including the framework for determining if a token \
                              is a capital markets product"
                    .to_string(),
                effective_date: None,
                reference: None,
            },
            Regulation {
                title: "Variable Capital Companies Act 2018".to_string(),
                description: "Enables tokenization of investment funds through Variable Capital \
                              Companies (VCCs) structure, facilitating digital asset funds"
                    .to_string(),
                effective_date: Some("2020-01-14".to_string()),
                reference: None,
            },
        ],
        requirements: vec![
            "License required under PSA for operating digital payment token services (exchange, \
             transfer, custodian services)"
                .to_string(),
            "Capital requirements: Minimum base capital of SGD 250,000 for DPT services"
                .to_string(),
            "AML/CFT compliance mandatory under PSA Notice PSN01 including customer due \
             diligence, transaction monitoring, and suspicious transaction reporting"
                .to_string(),
            "Technology risk management standards per MAS TRM Guidelines including \
             cybersecurity, data protection, business continuity"
                .to_string(),
            "Safeguarding of customer assets: Segregation of customer DPT and monies from \
             company assets"
                .to_string(),
            "Consumer protection measures including disclosure requirements, complaint handling \
             procedures"
                .to_string(),
            "Audit requirements: Annual statutory audit and submission to MAS".to_string(),
            "For security tokens: Compliance with SFA prospectus requirements or exemptions"
                .to_string(),
            "Stablecoin issuers: Reserve backing, redemption rights, transparency requirements \
             (if regulated as DPT)"
                .to_string(),
            "Corporate governance: Fit and proper criteria for officers, key personnel"
                .to_string(),
        ],
        authorities: vec![
            "Monetary Authority of Singapore (MAS) - Primary regulator for payment services and \
             securities"
                .to_string(),
            "Accounting and Corporate Regulatory Authority (ACRA) - Company registration and \
             compliance"
                .to_string(),
            "Singapore Police Force - Commercial Affairs Department (CAD) - Financial crime \
             enforcement"
                .to_string(),
        ],
        sources: vec![
            source("MAS Payment Services", "https://www.mas.gov.sg/regulation/payments", "Regulatory Portal"),
            source(
                "MAS Digital Assets",
                "https://www.mas.gov.sg/regulation/fintech/digital-assets",
                "Regulatory Portal",
            ),
            source("Payment Services Act 2019", "https://sso.agc.gov.sg/Act/PSA2019", "Legislation"),
            source("Securities and Futures Act", "https://sso.agc.gov.sg/Act/SFA2001", "Legislation"),
            source(
                "Project Guardian",
                "https://www.mas.gov.sg/schemes-and-initiatives/project-guardian",
                "Initiative",
            ),
            source(
                "MAS Guidelines on Digital Token Offerings",
                "https://www.mas.gov.sg/regulation/securities-futures-and-fund-management",
                "Guidelines",
            ),
            source("Singapore Statutes Online", "https://sso.agc.gov.sg/", "Legal Database"),
        ],
        whitepapers: vec![
            Paper {
                title: "Project Guardian: An Open and Interoperable Ecosystem for Digital Assets"
                    .to_string(),
                description: "Industry collaboration to test the feasibility of asset \
                              tokenization and DeFi applications in wholesale funding markets, \
                              exploring institutional DeFi"
                    .to_string(),
                date: Some("2022-11".to_string()),
                url: Some("https://www.mas.gov.sg/schemes-and-initiatives/project-guardian".to_string()),
            },
            Paper {
                title: "Project Orchid: Retail CBDC".to_string(),
                description: "Exploration of a purpose-bound digital Singapore dollar for retail \
                              use, examining the technical and policy considerations"
                    .to_string(),
                date: Some("2023-10".to_string()),
                url: None,
            },
            Paper {
                title: "Project Ubin Phase 5: Enabling Broad Ecosystem Opportunities".to_string(),
                description: "Industry collaboration exploring blockchain-based multi-currency \
                              payments and settlements, demonstrating delivery versus payment \
                              settlement for tokenized assets"
                    .to_string(),
                date: Some("2020-07".to_string()),
                url: None,
            },
            Paper {
                title: "Stablecoin Regulatory Framework".to_string(),
                description: "MAS framework for regulating stablecoins, distinguishing between \
                              single-currency and multi-currency pegged stablecoins"
                    .to_string(),
                date: Some("2023-08".to_string()),
                url: None,
            },
        ],
        consultation_papers: vec![
            Paper {
                title: "Proposed Regulatory Approach for Stablecoin-related Activities".to_string(),
                description: "Consultation on regulatory framework for stablecoin issuance and \
                              reserve management, capital and liquidity requirements"
                    .to_string(),
                date: Some("2022-10-26".to_string()),
                url: None,
            },
            Paper {
                title: "Consultation Paper on Proposed Amendments to the Payment Services Act"
                    .to_string(),
                description: "Proposed enhancements to PSA framework including expanded scope \
                              and strengthened consumer protection measures"
                    .to_string(),
                date: Some("2024-08".to_string()),
                url: None,
            },
            Paper {
                title: "Consultation on Financial Services and Markets Bill".to_string(),
                description: "Comprehensive reform of financial services regulatory framework, \
                              including provisions affecting digital assets"
                    .to_string(),
                date: Some("2021-11".to_string()),
                url: None,
            },
        ],
        legal_framework: vec![
            LegalFrameworkItem {
                law: "Payment Services Act 2019".to_string(),
                chapter: Some("Act 2 of 2019".to_string()),
                key_provisions: vec![
                    "Part 2: Licensing of payment service providers (including DPT services)"
                        .to_string(),
                    "Section 5: Digital payment token service defined".to_string(),
                    "Section 6: Licensing requirements for DPT service providers".to_string(),
                    "Part 5: Business conduct requirements".to_string(),
                    "Part 6: Technology risk management requirements".to_string(),
                ],
                // Penalty amounts as per PSA 2019; verify against the
                // current statute when refreshing.
                penalties: Some(
                    "Up to SGD 125,000 fine and/or 3 years imprisonment for operating without \
                     a license"
                        .to_string(),
                ),
                effective_date: None,
            },
            LegalFrameworkItem {
                law: "Securities and Futures Act".to_string(),
                chapter: Some("Chapter 289".to_string()),
                key_provisions: vec![
                    "Section 239: Definition of capital markets products".to_string(),
                    "Section 286-287: Prohibition on false trading and market manipulation"
                        .to_string(),
                    "Part XIII: Offers of investments (prospectus requirements)".to_string(),
                    "First Schedule: Specified securities (includes digital tokens meeting \
                     criteria)"
                        .to_string(),
                ],
                penalties: Some(
                    "Civil and criminal penalties for unlicensed activities and market \
                     misconduct"
                        .to_string(),
                ),
                effective_date: None,
            },
            LegalFrameworkItem {
                law: "Financial Services and Markets Act 2022".to_string(),
                chapter: Some("Act 29 of 2022".to_string()),
                key_provisions: vec![
                    "Consolidated framework for financial services regulation".to_string(),
                    "Enhanced powers for MAS oversight".to_string(),
                    "Technology risk management requirements".to_string(),
                    "Consumer protection measures for digital assets".to_string(),
                ],
                penalties: None,
                effective_date: Some("Phased implementation from 2023".to_string()),
            },
        ],
        last_updated: Some(today()),
        status: Some(regatlas_core::ComplianceStatus::Clear),
        auto_fetched: true,
        data_version: Some("2.0".to_string()),
    }
}

fn source(name: &str, url: &str, kind: &str) -> SourceLink {
    SourceLink {
        name: name.to_string(),
        url: url.to_string(),
        kind: Some(kind.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CountryCode {
        CountryCode::new(s).unwrap()
    }

    #[test]
    fn test_curated_singapore_is_complete() {
        let sg = curated_singapore();
        assert!(sg.has_content());
        assert_eq!(sg.regulations.len(), 5);
        assert_eq!(sg.whitepapers.len(), 4);
        assert_eq!(sg.consultation_papers.len(), 3);
        assert_eq!(sg.legal_framework.len(), 3);
        assert_eq!(sg.requirements.len(), 10);
        assert_eq!(sg.authorities.len(), 3);
        assert_eq!(sg.sources.len(), 7);
        assert!(sg.auto_fetched);
        assert_eq!(sg.data_version.as_deref(), Some("2.0"));
    }

    #[test]
    fn test_refresh_upserts_singapore() {
        let mut dataset = CountryDataset::default();
        refresh_dataset(&mut dataset);
        let sg = dataset.get(&code("SG")).unwrap();
        assert!(sg.overview.as_deref().unwrap().contains("Monetary Authority of Singapore"));
    }

    #[test]
    fn test_refresh_stamps_existing_jurisdictions_only() {
        let mut dataset = CountryDataset::default();
        dataset.upsert(
            code("US"),
            CountryRecord {
                overview: Some("SEC framework.".to_string()),
                last_updated: Some("2020-01-01".to_string()),
                ..Default::default()
            },
        );
        refresh_dataset(&mut dataset);

        let us = dataset.get(&code("US")).unwrap();
        assert_eq!(us.last_updated.as_deref(), Some(today().as_str()));
        assert!(us.auto_fetched);
        // GB had no record, so the stamp must not create one.
        assert!(dataset.get(&code("GB")).is_none());
    }

    #[test]
    fn test_run_fetch_writes_documents() {
        let dir = tempfile::tempdir().unwrap();
        let args = FetchArgs {
            no_country_files: false,
        };
        let exit = run_fetch(&args, dir.path()).unwrap();
        assert_eq!(exit, 0);

        let countries = std::fs::read_to_string(dir.path().join("countries.json")).unwrap();
        let dataset = CountryDataset::from_json(&countries).unwrap();
        assert!(dataset.get(&code("SG")).is_some());

        let sg_file = dir.path().join("countries").join("SG.json");
        let raw = std::fs::read_to_string(sg_file).unwrap();
        let record: CountryRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(record.regulations.len(), 5);
        assert_eq!(record.legal_framework.len(), 3);
        assert!(record.legal_framework[0]
            .key_provisions
            .iter()
            .any(|p| p.contains("Section 6")));
    }

    #[test]
    fn test_run_fetch_can_skip_country_files() {
        let dir = tempfile::tempdir().unwrap();
        let args = FetchArgs {
            no_country_files: true,
        };
        run_fetch(&args, dir.path()).unwrap();
        assert!(!dir.path().join("countries").exists());
    }
}
