//! Report task templates and context threading
//!
//! Every instruction string is built fresh from static templates plus the
//! upstream texts it depends on. Nothing here mutates a long-lived task
//! object, so rerunning a phase's threading with the same inputs yields
//! byte-identical instructions.

use crate::config::{MAX_CRISIS_DURATION_MONTHS, MIN_CRISIS_DURATION_MONTHS};
use crate::error::{SimulatorError, SimulatorResult};
use crate::simulation::participants::{self, Participant};
use uuid::Uuid;

/// Header that precedes the Phase 1 report in every Phase 2 instruction
pub const CRISIS_CONTEXT_HEADER: &str = "Crisis Report Details:";
/// Header that precedes the full roundup in the Phase 3 instruction
pub const ROUNDUP_HEADER: &str = "All Agents' Reports:";
/// First line of the roundup itself
pub const ROUNDUP_PREAMBLE: &str = "Below are the outputs from all agents:\n\n";

/// Validated operator input for one simulation run
///
/// The constructor is the input boundary: the pipeline core assumes a
/// non-empty crisis description and an in-range duration.
#[derive(Debug, Clone, PartialEq)]
pub struct CrisisInput {
    details: String,
    duration_months: u8,
}

impl CrisisInput {
    pub fn new(details: impl Into<String>, duration_months: u8) -> SimulatorResult<Self> {
        let details = details.into();
        if details.trim().is_empty() {
            return Err(SimulatorError::invalid_input(
                "crisis details must not be empty",
            ));
        }
        if !(MIN_CRISIS_DURATION_MONTHS..=MAX_CRISIS_DURATION_MONTHS).contains(&duration_months) {
            return Err(SimulatorError::invalid_input(format!(
                "crisis duration {duration_months} outside {MIN_CRISIS_DURATION_MONTHS}..={MAX_CRISIS_DURATION_MONTHS} months"
            )));
        }
        Ok(Self {
            details,
            duration_months,
        })
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn duration_months(&self) -> u8 {
        self.duration_months
    }
}

/// One participant's report task for one run
#[derive(Debug, Clone)]
pub struct ReportTask {
    pub id: Uuid,
    pub participant_id: &'static str,
    /// Full instruction text, upstream context already threaded in
    pub instruction: String,
    /// Shape the report is expected to take
    pub expected_output: String,
}

impl ReportTask {
    fn new(participant_id: &'static str, instruction: String, expected_output: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            participant_id,
            instruction,
            expected_output,
        }
    }
}

/// Thread the Phase 1 report into a stakeholder instruction
///
/// The report is the trailing substring of the result; downstream tests and
/// consumers rely on that.
pub fn with_crisis_context(base_instruction: &str, crisis_report: &str) -> String {
    format!("{base_instruction}\n\n{CRISIS_CONTEXT_HEADER}\n{crisis_report}")
}

/// Build the labeled roundup of all reports for the summary task
///
/// Blocks appear in the order given: callers pass Phase 2 outputs in
/// registration order followed by the analyst's own report. The analyst-last
/// ordering mirrors the reference behavior and is pinned by tests; revisit
/// only together with the consumers of the labeled output.
pub fn roundup_context(labeled_outputs: &[(&str, &str)]) -> String {
    let mut roundup = String::from(ROUNDUP_PREAMBLE);
    for (role_name, output) in labeled_outputs {
        roundup.push_str(&format!("Agent: {role_name} Output:\n{output}\n\n"));
    }
    roundup
}

/// The Phase 1 task: expand the operator's input into a full scenario
pub fn crisis_analysis_task(input: &CrisisInput) -> ReportTask {
    let instruction = format!(
        "\
The Crisis Analyst must expand upon the inputs provided by the user to develop a comprehensive context analysis.

Inputs:
- Crisis Details: '{details}'
- Crisis Duration: {duration} months

Task:
- Analyze and expand upon the provided crisis details, considering geopolitical, economic, and logistical factors.
- Develop a detailed scenario that outlines potential impacts on the supply chain, key stakeholders involved, and ripple effects across industries.
- Focus on providing a thorough context for the crisis without suggesting mitigation actions or strategies.",
        details = input.details(),
        duration = input.duration_months(),
    );

    let expected_output = format!(
        "\
Comprehensive Crisis Analysis Report

Prepared by: Crisis Analyst Team
Crisis in Focus: {details}

The report should include:
- A detailed overview of the crisis, including root causes, key stakeholders, and affected industries.
- Analysis of potential impacts on the supply chain, with a focus on the Galaxy S24 Ultra production and distribution.
- Identification of secondary effects, such as economic, political, or environmental repercussions.
- Scenarios outlining possible developments over the crisis duration ({duration} months).",
        details = input.details(),
        duration = input.duration_months(),
    );

    ReportTask::new(participants::analyst().id, instruction, expected_output)
}

/// The ten Phase 2 tasks in registration order, each seeded with the Phase 1
/// report
pub fn stakeholder_tasks(crisis_report: &str) -> Vec<(&'static Participant, ReportTask)> {
    participants::stakeholders()
        .iter()
        .filter_map(|participant| {
            stakeholder_template(participant.id).map(|(description, expected_output)| {
                let task = ReportTask::new(
                    participant.id,
                    with_crisis_context(description, crisis_report),
                    expected_output.to_string(),
                );
                (participant, task)
            })
        })
        .collect()
}

/// The Phase 3 task, fed the labeled roundup of every earlier report
pub fn summary_task(labeled_outputs: &[(&str, &str)]) -> ReportTask {
    let instruction = format!(
        "{SUMMARY_TASK}\n\n{ROUNDUP_HEADER}\n{roundup}",
        roundup = roundup_context(labeled_outputs),
    );
    ReportTask::new(
        participants::summarizer().id,
        instruction,
        SUMMARY_EXPECTED.to_string(),
    )
}

/// Base (instruction, expected output) template for one stakeholder
fn stakeholder_template(participant_id: &str) -> Option<(&'static str, &'static str)> {
    match participant_id {
        "qualcomm" => Some((QUALCOMM_TASK, QUALCOMM_EXPECTED)),
        "samsung-display" => Some((SAMSUNG_DISPLAY_TASK, SAMSUNG_DISPLAY_EXPECTED)),
        "sony" => Some((SONY_TASK, SONY_EXPECTED)),
        "lg-chem" => Some((LG_CHEM_TASK, LG_CHEM_EXPECTED)),
        "sk-hynix" => Some((SK_HYNIX_TASK, SK_HYNIX_EXPECTED)),
        "ibiden" => Some((IBIDEN_TASK, IBIDEN_EXPECTED)),
        "foxconn-vietnam" => Some((FOXCONN_TASK, FOXCONN_EXPECTED)),
        "dhl-logistics" => Some((DHL_TASK, DHL_EXPECTED)),
        "amazon-distribution" => Some((AMAZON_TASK, AMAZON_EXPECTED)),
        "samsung-care" => Some((SAMSUNG_CARE_TASK, SAMSUNG_CARE_EXPECTED)),
        _ => None,
    }
}

const QUALCOMM_TASK: &str = "\
Qualcomm must ensure the production and delivery of Snapdragon chipsets for the Galaxy S24 Ultra.

- Consider the current crisis context based on the report provided by the Crisis Analyst.
- Evaluate the current production capacity and utilize available resources.
- Collaborate with Samsung R&D to determine production priorities.
- Interact with Foxconn Assembly to understand assembly requirements and synchronize timelines.
- Report any issues, such as material shortages or logistical delays, and implement appropriate solutions.";

const QUALCOMM_EXPECTED: &str = "\
Qualcomm Supply Chain Report – Galaxy S24 Ultra

Actions Taken:
- Details of production decisions based on current capacity and model priorities.
- Collaborations with other agents, such as Samsung R&D and Foxconn Assembly, to align production with supply chain requirements.
- Relevant KPIs, including production capacity, on-time delivery rate, inventory levels, and cost impacts.
- Challenges encountered (e.g., material shortages, logistical disruptions) and the solutions adopted.
- Evaluation of future outlooks and lessons learned.";

const SAMSUNG_DISPLAY_TASK: &str = "\
Samsung Display must ensure uninterrupted OLED panel production for the Galaxy S24 Ultra.

- Assess the current crisis context based on the report provided by the Crisis Analyst.
- Evaluate current production capacity and material availability.
- Collaborate with suppliers to address any material shortages and explore alternative sourcing options.
- Communicate with Foxconn Assembly to align delivery schedules with production needs.
- Report any disruptions or quality concerns and implement corrective measures.";

const SAMSUNG_DISPLAY_EXPECTED: &str = "\
Samsung Display Report – Galaxy S24 Ultra

Actions Taken:
- Overview of production decisions and adjustments made to maintain OLED panel output.
- Details of collaborations with suppliers to secure materials and mitigate disruptions.
- Coordination efforts with Foxconn Assembly to align production timelines with assembly requirements.
- Key KPIs, including production volume, quality metrics, lead time adherence, and supplier performance.
- Challenges encountered (e.g., material shortages, production delays) and solutions implemented.
- Lessons learned and recommendations for future resilience.";

const SONY_TASK: &str = "\
Sony must ensure the production and delivery of high-resolution camera sensors for the Galaxy S24 Ultra.

- Assess the current crisis context based on the report provided by the Crisis Analyst.
- Evaluate the production capacity and prioritize flagship sensor models to meet Samsung's requirements.
- Collaborate with suppliers to secure raw materials and address any shortages.
- Communicate with Foxconn Assembly to align sensor delivery with assembly timelines.
- Report on any production or quality issues encountered and outline the corrective actions taken.";

const SONY_EXPECTED: &str = "\
Sony Camera Report – Galaxy S24 Ultra

Actions Taken:
- Summary of production priorities and adjustments made to ensure high-resolution sensor output.
- Details of collaborations with suppliers to address material shortages or sourcing challenges.
- Coordination efforts with Foxconn Assembly to align sensor delivery with assembly requirements.
- Key KPIs, including production volume, quality rates, lead time adherence, and supplier performance.
- Challenges encountered (e.g., material shortages, production delays) and solutions implemented.
- Recommendations for improving supply chain resilience in future crises.";

const LG_CHEM_TASK: &str = "\
LG Chem must ensure the uninterrupted production and delivery of high-density batteries for the Galaxy S24 Ultra.

- Assess the current crisis context based on the report provided by the Crisis Analyst.
- Evaluate the availability of raw materials and collaborate with suppliers to address any shortages.
- Optimize production processes to maintain quality and efficiency despite potential constraints.
- Communicate with Foxconn Assembly to synchronize battery delivery with the assembly schedule.
- Report on any production challenges, material shortages, or delays, and detail the actions taken to resolve them.";

const LG_CHEM_EXPECTED: &str = "\
LG Chem Report – Galaxy S24 Ultra

Actions Taken:
- Summary of measures implemented to secure raw materials and maintain production output.
- Collaborations with suppliers to address material shortages and ensure continuity.
- Coordination efforts with Foxconn Assembly to align battery delivery with assembly requirements.
- Key KPIs, including production capacity, defect rates, lead times, and cost variations for raw materials.
- Challenges encountered (e.g., raw material shortages, production inefficiencies) and solutions adopted.
- Recommendations for improving production resilience and supply chain efficiency in future crises.";

const SK_HYNIX_TASK: &str = "\
SK Hynix must ensure a stable supply of memory modules for the Galaxy S24 Ultra, addressing any potential disruptions caused by the crisis.

- Assess the current crisis context based on the report provided by the Crisis Analyst.
- Evaluate current production capabilities and identify any risks to memory module supply.
- Collaborate with suppliers and production partners to diversify sourcing and ensure supply continuity.
- Communicate with Foxconn Assembly to align memory delivery schedules with assembly requirements.
- Report on challenges faced, such as material shortages or logistical delays, and the measures taken to address them.";

const SK_HYNIX_EXPECTED: &str = "\
SK Hynix Report – Galaxy S24 Ultra

Actions Taken:
- Overview of steps taken to secure memory module supply and ensure production continuity.
- Collaborations with suppliers and production partners to address sourcing challenges and diversify supply.
- Coordination efforts with Foxconn Assembly to synchronize memory delivery with assembly timelines.
- Key KPIs, including production volume, on-time delivery rate, supply diversification index, and cost impact.
- Challenges encountered (e.g., material shortages, production delays) and solutions implemented.
- Recommendations for improving memory supply chain resilience in future crises.";

const IBIDEN_TASK: &str = "\
Ibiden must ensure uninterrupted PCB production for the Galaxy S24 Ultra, addressing any disruptions caused by the crisis.

- Assess the current crisis context based on the report provided by the Crisis Analyst.
- Evaluate material availability and collaborate with suppliers to address any shortages.
- Explore alternative sourcing options and implement design adjustments to optimize production.
- Communicate with Foxconn Assembly to align PCB delivery schedules with assembly requirements.
- Report on any production challenges, material issues, or delays, and detail the corrective actions taken.";

const IBIDEN_EXPECTED: &str = "\
Ibiden Report – Galaxy S24 Ultra

Actions Taken:
- Overview of measures implemented to maintain PCB production and address material sourcing challenges.
- Details of collaborations with suppliers to secure raw materials and diversify sourcing options.
- Coordination efforts with Foxconn Assembly to ensure timely delivery of PCBs for assembly.
- Key KPIs, including production throughput, defect rate, supply diversification index, and cost impact.
- Challenges encountered (e.g., material shortages, production inefficiencies) and solutions implemented.
- Recommendations for enhancing PCB production resilience and efficiency in future crises.";

const FOXCONN_TASK: &str = "\
Foxconn must oversee the final assembly of the Galaxy S24 Ultra while addressing any disruptions caused by the crisis.

- Assess the current crisis context based on the report provided by the Crisis Analyst.
- Coordinate with suppliers such as Samsung Display, Qualcomm, and Ibiden to ensure timely delivery of components.
- Adjust assembly lines and optimize workflows to maintain production efficiency under challenging conditions.
- Implement stringent quality control measures to ensure the final product meets Samsung's standards.
- Collaborate with DHL Logistics to plan outbound shipments and synchronize delivery schedules.
- Report on challenges faced during assembly and logistics, and detail the actions taken to resolve them.";

const FOXCONN_EXPECTED: &str = "\
Foxconn Assembly Report – Galaxy S24 Ultra

Actions Taken:
- Summary of assembly adjustments and workflow optimizations implemented to maintain production efficiency.
- Details of collaborations with suppliers (e.g., Samsung Display, Qualcomm, Ibiden) to ensure timely component delivery.
- Coordination efforts with DHL Logistics to plan outbound shipments and minimize delays.
- Key KPIs, including assembly throughput, defect rates, and on-time shipment percentage.
- Challenges encountered (e.g., component delays, assembly line disruptions) and solutions adopted.
- Recommendations for improving assembly and logistics coordination in future crises.";

const DHL_TASK: &str = "\
DHL must manage the global logistics operations for the Galaxy S24 Ultra, ensuring smooth inbound and outbound shipments despite the crisis.

- Assess the current crisis context based on the report provided by the Crisis Analyst.
- Evaluate the actions and updates from other agents: Qualcomm, Sony Camera, Samsung Display, and LG Chem, SK Hynix, Ibiden and Foxconn Assembly including their geographic locations, to adapt logistics strategies accordingly.
- Incorporate geographic information into planning, mapping routes between agent locations (e.g., Samsung Display in South Korea to Foxconn Assembly in Vietnam).
- Develop contingency plans to reroute shipments in case of delays or disruptions.
- Prioritize the handling and delivery of critical components to maintain the supply chain flow.
- Report on logistical challenges faced, including transportation bottlenecks or cost overruns, and detail the solutions implemented.";

const DHL_EXPECTED: &str = "\
DHL Logistics Report – Galaxy S24 Ultra

Actions Taken:
- Overview of logistics adjustments made in response to the crisis, including rerouting and prioritization strategies.
- Geographic information on logistics routes, including:
    - Key routes
    - Alternate routes and contingency plans implemented to bypass disruptions.
- Details of coordination efforts with other agents: Qualcomm, Sony Camera, Samsung Display, and LG Chem, SK Hynix, Ibiden and Foxconn Assembly to align logistics with production timelines.
- Key KPIs, such as delivery time variance, on-time shipment rate, and cost impact of logistical changes.
- Challenges encountered and the measures taken to resolve them.
- Recommendations for improving logistics resilience and efficiency in future crises.";

const AMAZON_TASK: &str = "\
Amazon must manage the global distribution and sales of the Galaxy S24 Ultra, ensuring timely delivery and customer satisfaction despite the crisis.

- Assess the current crisis context based on the report provided by the Crisis Analyst.
- Coordinate closely with DHL Logistics to align shipping schedules, prioritize key markets, and address disruptions in transportation.
- Use geographic and logistical insights from DHL Logistics to optimize inventory placement in regional fulfillment centers.
- Implement customer communication plans to manage expectations and provide updates on order status based on real-time delivery data from DHL Logistics.
- Report on challenges faced in distribution, such as regional delays or mismatches between supply and demand, and the actions taken to resolve them.";

const AMAZON_EXPECTED: &str = "\
Amazon Distribution Report – Galaxy S24 Ultra

Actions Taken:
- Summary of adjustments made to distribution and sales strategies based on the crisis context.
- Details of coordination with DHL Logistics, including:
    - Shipping schedule alignment for timely deliveries.
    - Prioritization of key markets based on demand and logistical feasibility.
    - Inventory redistribution to minimize delays in regional fulfillment centers.
- Implementation of customer communication strategies informed by DHL's real-time delivery updates to manage expectations and improve satisfaction.
- Key KPIs:
    - Delivery timeliness rate.
    - Inventory turnover rates across regions.
    - Customer satisfaction metrics.
- Challenges encountered, including regional delays due to logistical bottlenecks and mismatches in demand and supply, with the geographic positions involved.
- Solutions adopted, such as dynamic reprioritization of shipments with DHL and enhanced communication channels to keep customers informed.";

const SAMSUNG_CARE_TASK: &str = "\
Samsung Care must provide comprehensive after-sales support for the Galaxy S24 Ultra, ensuring high customer satisfaction during the crisis.

- Assess the current crisis context based on the report provided by the Crisis Analyst.
- Plan and manage spare parts inventory to ensure availability for repairs, considering potential supply chain delays.
- Adjust repair workflows to maintain efficiency under constrained conditions, prioritizing high-impact cases.
- Implement proactive customer communication strategies to address concerns and manage expectations.
- Report on challenges faced in after-sales operations, such as spare part shortages or increased service demand, and the actions taken to address them.";

const SAMSUNG_CARE_EXPECTED: &str = "\
Samsung Care After-Sales Report – Galaxy S24 Ultra

Actions Taken:
- Overview of spare parts inventory management and adjustments made to ensure repair readiness.
- Details of updated repair workflows to maintain efficiency and prioritize critical cases.
- Implementation of customer communication strategies to minimize dissatisfaction and build trust.
- Key KPIs, including repair turnaround time, first-time resolution rate, and customer satisfaction metrics.
- Challenges encountered (e.g., spare part shortages, increased service demand) and solutions adopted.
- Recommendations for improving after-sales service resilience and customer engagement in future crises.";

const SUMMARY_TASK: &str = "\
Summary Agent must collect the most important information from all other agents' outputs and produce a final summary and highlight section.

- Review the final outputs from each agent (Qualcomm, Samsung Display, Sony Camera, LG Chem, SK Hynix, Ibiden, Foxconn, DHL, Amazon, Samsung Care, and the Crisis Analyst).
- Extract critical highlights, including major KPIs, challenges, solutions, and overall operational performance.
- Provide a concise set of bullet points for \"Highlights\" and a short paragraph summarizing how the crisis was managed.";

const SUMMARY_EXPECTED: &str = "\
Final Consolidated Summary

Highlights:
- Key bullet points capturing major achievements and metrics.

Overall Summary:
A concise paragraph describing the outcome of the crisis management efforts, including main challenges, solutions, and the final result on supply chain operations.";
