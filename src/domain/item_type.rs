// Copyright (c) 2025 - Cowboy AI, Inc.
//! Fabric Item Type Domain Model
//!
//! Defines the taxonomy of Fabric items that can live inside a workspace.
//! The canonical string form is the `type` value returned by the Fabric REST
//! API, so parsing and rendering round-trip against live inventory data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fabric item type taxonomy
///
/// Types the API reports that this enum does not know are kept verbatim in
/// [`ItemType::Other`] so they still flow through classification and export.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemType {
    // Reporting
    /// Power BI report
    Report,
    /// Semantic model (formerly dataset)
    SemanticModel,
    /// Power BI dashboard
    Dashboard,
    /// Paginated (RDL) report
    PaginatedReport,

    // Storage
    /// Lakehouse
    Lakehouse,
    /// Data warehouse
    Warehouse,
    /// SQL analytics endpoint attached to a lakehouse
    SQLEndpoint,
    /// Mirrored database
    MirroredDatabase,

    // Data engineering
    /// Spark notebook
    Notebook,
    /// Spark job definition
    SparkJobDefinition,
    /// Spark environment
    Environment,
    /// Data pipeline
    DataPipeline,
    /// Dataflow Gen2
    Dataflow,
    /// Copy job
    CopyJob,
    /// GraphQL API
    GraphQLApi,

    // Real-time intelligence
    /// Eventhouse
    Eventhouse,
    /// KQL database
    KQLDatabase,
    /// KQL queryset
    KQLQueryset,
    /// Real-time dashboard
    KQLDashboard,
    /// Eventstream
    Eventstream,
    /// Activator (Reflex)
    Reflex,

    // Data science
    /// Machine learning model
    MLModel,
    /// Machine learning experiment
    MLExperiment,

    /// Type not recognized by this taxonomy, carried verbatim
    Other(String),
}

impl ItemType {
    /// All recognized item types, in declaration order
    pub const KNOWN: [ItemType; 23] = [
        Self::Report,
        Self::SemanticModel,
        Self::Dashboard,
        Self::PaginatedReport,
        Self::Lakehouse,
        Self::Warehouse,
        Self::SQLEndpoint,
        Self::MirroredDatabase,
        Self::Notebook,
        Self::SparkJobDefinition,
        Self::Environment,
        Self::DataPipeline,
        Self::Dataflow,
        Self::CopyJob,
        Self::GraphQLApi,
        Self::Eventhouse,
        Self::KQLDatabase,
        Self::KQLQueryset,
        Self::KQLDashboard,
        Self::Eventstream,
        Self::Reflex,
        Self::MLModel,
        Self::MLExperiment,
    ];

    /// Canonical Fabric API type name
    pub fn as_str(&self) -> &str {
        match self {
            Self::Report => "Report",
            Self::SemanticModel => "SemanticModel",
            Self::Dashboard => "Dashboard",
            Self::PaginatedReport => "PaginatedReport",
            Self::Lakehouse => "Lakehouse",
            Self::Warehouse => "Warehouse",
            Self::SQLEndpoint => "SQLEndpoint",
            Self::MirroredDatabase => "MirroredDatabase",
            Self::Notebook => "Notebook",
            Self::SparkJobDefinition => "SparkJobDefinition",
            Self::Environment => "Environment",
            Self::DataPipeline => "DataPipeline",
            Self::Dataflow => "Dataflow",
            Self::CopyJob => "CopyJob",
            Self::GraphQLApi => "GraphQLApi",
            Self::Eventhouse => "Eventhouse",
            Self::KQLDatabase => "KQLDatabase",
            Self::KQLQueryset => "KQLQueryset",
            Self::KQLDashboard => "KQLDashboard",
            Self::Eventstream => "Eventstream",
            Self::Reflex => "Reflex",
            Self::MLModel => "MLModel",
            Self::MLExperiment => "MLExperiment",
            Self::Other(name) => name,
        }
    }

    /// Parse an API type name, accepting legacy Power BI and admin-API aliases
    pub fn from_api_name(s: &str) -> Self {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "report" | "powerbireport" => Self::Report,
            "semanticmodel" | "dataset" => Self::SemanticModel,
            "dashboard" => Self::Dashboard,
            "paginatedreport" | "rdlreport" => Self::PaginatedReport,
            "lakehouse" => Self::Lakehouse,
            "warehouse" | "datawarehouse" => Self::Warehouse,
            "sqlendpoint" | "sqlanalyticsendpoint" => Self::SQLEndpoint,
            "mirroreddatabase" | "mirroredwarehouse" => Self::MirroredDatabase,
            "notebook" | "synapsenotebook" => Self::Notebook,
            "sparkjobdefinition" => Self::SparkJobDefinition,
            "environment" => Self::Environment,
            "datapipeline" | "pipeline" => Self::DataPipeline,
            "dataflow" | "dataflowgen2" => Self::Dataflow,
            "copyjob" => Self::CopyJob,
            "graphqlapi" => Self::GraphQLApi,
            "eventhouse" => Self::Eventhouse,
            "kqldatabase" => Self::KQLDatabase,
            "kqlqueryset" => Self::KQLQueryset,
            "kqldashboard" | "realtimedashboard" => Self::KQLDashboard,
            "eventstream" => Self::Eventstream,
            "reflex" | "activator" => Self::Reflex,
            "mlmodel" => Self::MLModel,
            "mlexperiment" => Self::MLExperiment,
            _ => Self::Other(s.trim().to_string()),
        }
    }

    /// Human-readable display name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Report => "Report",
            Self::SemanticModel => "Semantic Model",
            Self::Dashboard => "Dashboard",
            Self::PaginatedReport => "Paginated Report",
            Self::Lakehouse => "Lakehouse",
            Self::Warehouse => "Warehouse",
            Self::SQLEndpoint => "SQL Analytics Endpoint",
            Self::MirroredDatabase => "Mirrored Database",
            Self::Notebook => "Notebook",
            Self::SparkJobDefinition => "Spark Job Definition",
            Self::Environment => "Environment",
            Self::DataPipeline => "Data Pipeline",
            Self::Dataflow => "Dataflow Gen2",
            Self::CopyJob => "Copy Job",
            Self::GraphQLApi => "API for GraphQL",
            Self::Eventhouse => "Eventhouse",
            Self::KQLDatabase => "KQL Database",
            Self::KQLQueryset => "KQL Queryset",
            Self::KQLDashboard => "Real-Time Dashboard",
            Self::Eventstream => "Eventstream",
            Self::Reflex => "Activator",
            Self::MLModel => "ML Model",
            Self::MLExperiment => "ML Experiment",
            Self::Other(name) => name,
        }
    }

    /// Get the workload category for this item type
    pub fn category(&self) -> ItemCategory {
        match self {
            Self::Report | Self::SemanticModel | Self::Dashboard | Self::PaginatedReport => {
                ItemCategory::Reporting
            }

            Self::Lakehouse | Self::Warehouse | Self::SQLEndpoint | Self::MirroredDatabase => {
                ItemCategory::Storage
            }

            Self::Notebook
            | Self::SparkJobDefinition
            | Self::Environment
            | Self::DataPipeline
            | Self::Dataflow
            | Self::CopyJob
            | Self::GraphQLApi => ItemCategory::DataEngineering,

            Self::Eventhouse
            | Self::KQLDatabase
            | Self::KQLQueryset
            | Self::KQLDashboard
            | Self::Eventstream
            | Self::Reflex => ItemCategory::RealTime,

            Self::MLModel | Self::MLExperiment => ItemCategory::DataScience,

            Self::Other(_) => ItemCategory::Other,
        }
    }

    /// Whether this type belongs to the known taxonomy
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Whether items of this type keep a job-run history
    pub fn runs_jobs(&self) -> bool {
        matches!(
            self,
            Self::DataPipeline
                | Self::Notebook
                | Self::SparkJobDefinition
                | Self::Dataflow
                | Self::CopyJob
        )
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for ItemType {
    fn from(s: &str) -> Self {
        Self::from_api_name(s)
    }
}

impl From<String> for ItemType {
    fn from(s: String) -> Self {
        Self::from_api_name(&s)
    }
}

impl From<ItemType> for String {
    fn from(item_type: ItemType) -> Self {
        item_type.as_str().to_string()
    }
}

/// Workload category (high-level grouping)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    /// Reports, dashboards, semantic models
    Reporting,
    /// Lakehouses, warehouses, mirrored databases
    Storage,
    /// Notebooks, pipelines, Spark artifacts
    DataEngineering,
    /// Eventhouses, KQL, eventstreams
    RealTime,
    /// ML models and experiments
    DataScience,
    /// Unrecognized
    Other,
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reporting => write!(f, "Reporting"),
            Self::Storage => write!(f, "Storage"),
            Self::DataEngineering => write!(f, "Data Engineering"),
            Self::RealTime => write!(f, "Real-Time Intelligence"),
            Self::DataScience => write!(f, "Data Science"),
            Self::Other => write!(f, "Other"),
        }
    }
}
