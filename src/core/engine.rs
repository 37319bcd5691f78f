use crate::domain::model::{
    Budget, ComparisonResult, Constraints, Level, ServiceAssessment, ServiceCatalog,
    ServiceProfile,
};

pub const MANAGED_FALLBACK_CON: &str = "May require AWS expertise to fully utilize";
pub const HOSTED_FALLBACK_CON: &str = "Limited to OpenAI's model ecosystem";

const MANAGED_BLOCK: &[&str] = &[
    "🔷 Choose AWS BEDROCK if:",
    "   • You need high data privacy and compliance (HIPAA, SOC2)",
    "   • You're already in the AWS ecosystem",
    "   • You need access to multiple AI models (Claude, Llama, Titan)",
    "   • You require enterprise-grade scaling",
];

const HOSTED_BLOCK: &[&str] = &[
    "\n🔶 Choose OPENAI API if:",
    "   • You want fastest access to cutting-edge GPT models",
    "   • You prefer simple setup and integration",
    "   • You're building prototypes or MVPs quickly",
    "   • You want strong community support and resources",
];

pub const PRIVACY_BLOCK_HEADER: &str = "⚠️ Based on your HIGH data privacy requirement:";
const PRIVACY_BLOCK: &[&str] = &[
    "\n⚠️ Based on your HIGH data privacy requirement:",
    "   → AWS Bedrock is STRONGLY recommended",
];

pub const COST_BLOCK_HEADER: &str = "⚠️ Based on your LOW budget + LOW scalability:";
const COST_BLOCK: &[&str] = &[
    "\n⚠️ Based on your LOW budget + LOW scalability:",
    "   → OpenAI API may be more cost-effective for starting out",
];

/// Append-only accumulator for one service; frozen by `build`.
struct AssessmentBuilder {
    profile: ServiceProfile,
    pros: Vec<String>,
    cons: Vec<String>,
}

impl AssessmentBuilder {
    fn new(profile: ServiceProfile) -> Self {
        Self {
            profile,
            pros: Vec::new(),
            cons: Vec::new(),
        }
    }

    fn pro(&mut self, text: &str) -> &mut Self {
        self.pros.push(text.to_string());
        self
    }

    fn con(&mut self, text: &str) -> &mut Self {
        self.cons.push(text.to_string());
        self
    }

    fn build(self, fallback_con: &str) -> ServiceAssessment {
        let cons = if self.cons.is_empty() {
            vec![fallback_con.to_string()]
        } else {
            self.cons
        };
        ServiceAssessment {
            key: self.profile.key.to_string(),
            name: self.profile.name.to_string(),
            pros: self.pros,
            cons,
        }
    }
}

/// Rule table comparing the managed platform against the hosted API.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparisonEngine {
    catalog: ServiceCatalog,
}

impl ComparisonEngine {
    pub fn new(catalog: ServiceCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    pub fn compare(&self, constraints: &Constraints) -> ComparisonResult {
        let mut managed = AssessmentBuilder::new(self.catalog.managed);
        let mut hosted = AssessmentBuilder::new(self.catalog.hosted);

        match constraints.data_privacy {
            Level::High => {
                managed
                    .pro("Data stays within AWS infrastructure - better for compliance")
                    .pro("VPC integration for isolated environments");
                hosted.con("Data sent to external OpenAI servers");
            }
            Level::Low => {
                hosted.pro("Simple data handling for non-sensitive use cases");
            }
        }

        match constraints.budget {
            Budget::Low => {
                hosted
                    .pro("Pay-as-you-go with predictable per-token pricing")
                    .pro("Free tier available for experimentation");
                managed.con("AWS infrastructure costs can add up");
            }
            Budget::High => {
                managed
                    .pro("Enterprise pricing and committed use discounts")
                    .pro("Consolidated billing with other AWS services");
            }
            Budget::Medium => {
                managed.pro("Flexible pricing with multiple model options");
                hosted.pro("Transparent token-based pricing");
            }
        }

        match constraints.scalability {
            Level::High => {
                managed
                    .pro("Seamless scaling with AWS infrastructure")
                    .pro("Auto-scaling and load balancing built-in");
                hosted.con("Rate limits may require enterprise plan");
            }
            Level::Low => {
                hosted.pro("Simple API sufficient for moderate workloads");
            }
        }

        match constraints.vendor_lockin_tolerance {
            Level::Low => {
                hosted
                    .pro("Easier to switch - standard REST API")
                    .pro("Model-agnostic integration possible");
                managed.con("Tighter AWS ecosystem integration may increase dependency");
            }
            Level::High => {
                managed
                    .pro("Deep AWS integration benefits outweigh lock-in concerns")
                    .pro("Access to multiple foundation models (Claude, Llama, etc.)");
            }
        }

        managed
            .pro("Access to multiple AI models (Claude, Llama, Titan, etc.)")
            .pro("Native AWS service integration (Lambda, S3, etc.)");
        hosted
            .pro("Access to GPT-4 and latest OpenAI models")
            .pro("Extensive documentation and community support")
            .pro("Rapid model updates and improvements");

        ComparisonResult {
            managed: managed.build(MANAGED_FALLBACK_CON),
            hosted: hosted.build(HOSTED_FALLBACK_CON),
            verdict: build_verdict(constraints),
        }
    }
}

/// Conditional verdict: both "choose X if" blocks always, then the
/// constraint-triggered recommendations in fixed order.
pub fn build_verdict(constraints: &Constraints) -> String {
    let mut lines: Vec<&str> = Vec::with_capacity(16);
    lines.extend_from_slice(MANAGED_BLOCK);
    lines.extend_from_slice(HOSTED_BLOCK);

    if constraints.data_privacy == Level::High {
        lines.extend_from_slice(PRIVACY_BLOCK);
    }

    if constraints.budget == Budget::Low && constraints.scalability == Level::Low {
        lines.extend_from_slice(COST_BLOCK);
    }

    lines.join("\n")
}
