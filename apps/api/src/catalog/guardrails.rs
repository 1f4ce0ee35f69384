//! Guardrail catalog — the per-stage validation categories embedded into
//! every survey prompt.
//!
//! Each category carries example questions used as inspiration only; the
//! prompt explicitly forbids copying them verbatim.

use serde::Serialize;

use crate::models::startup::LifecycleStage;

/// A named heuristic dimension (e.g. "WILLINGNESS TO PAY") that keeps the
/// generated survey covering ground beyond the burning problems.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GuardrailCategory {
    /// Unique within a stage.
    pub name: &'static str,
    pub description: &'static str,
    pub example_questions: &'static [&'static str],
}

/// Returns the ordered guardrail categories for a stage.
pub fn categories_for(stage: LifecycleStage) -> &'static [GuardrailCategory] {
    match stage {
        LifecycleStage::IdeationAndPlanning => IDEATION_GUARDRAILS,
        LifecycleStage::PrototypeDevelopment => PROTOTYPE_GUARDRAILS,
        LifecycleStage::ValidationAndIteration => VALIDATION_GUARDRAILS,
        LifecycleStage::LaunchAndScaling => LAUNCH_GUARDRAILS,
        LifecycleStage::GrowthAndOptimization => GROWTH_GUARDRAILS,
    }
}

const IDEATION_GUARDRAILS: &[GuardrailCategory] = &[
    GuardrailCategory {
        name: "PROBLEM RELEVANCE",
        description: "Checks whether the target user faces the problem the product solves. Helps reveal frequency & intensity of the problem.",
        example_questions: &[
            "How often do you face [the problem] in your daily or professional life?",
            "On a scale of 1–10, how disruptive is [this problem] to your goals or tasks?",
            "What's the most frustrating part of dealing with [insert problem domain] in your daily routine?",
            "On a scale of 1–5, how important is solving this problem for you right now?",
            "If you had a magic wand, which problem would you fix first? [Option A: Problem the startup solves] [Option B: Another major problem] [Option C: None]",
            "How often does this problem interrupt or slow down your work/life? (1 = Never, 5 = Constantly)",
            "What have you done in the past to try to fix or avoid this problem?",
            "Have you ever wished there was a better solution for this issue? Yes/No?",
        ],
    },
    GuardrailCategory {
        name: "PROBLEM AWARENESS",
        description: "Measures if users know they have this problem. Distinguishes latent vs obvious problems.",
        example_questions: &[
            "Have you ever actively tried to solve [this problem]?",
            "Before hearing about this solution, how aware were you of [this problem] being an issue for you?",
            "How clearly do you understand the nature of this problem in your own context? (1 = I've never thought about it, 5 = I think about it all the time)",
            "When did you first become aware that this was a problem?",
            "Do you think most people in your role even recognize this as a problem? Yes/No",
            "How much do you feel this issue affects people like you? (1 = Very little, 5 = Very significantly)",
            "How would you describe your awareness of this problem? [I'm very aware] [I've seen it happen but don't think about it] [I didn't realize it was a real issue until now] [I'm not sure it exists]",
            "Can you describe a moment or example when this problem stood out to you?",
        ],
    },
    GuardrailCategory {
        name: "CURRENT SOLUTIONS",
        description: "Understand what users currently use to solve the problem. Reveals competition and workarounds.",
        example_questions: &[
            "What tools or methods do you currently use to deal with [this problem]?",
            "How satisfied are you with your current way of handling [this problem]?",
            "How are you currently solving this problem today?",
            "What do you currently use? [Excel/Manual methods] [Known competitor] [Internal workaround] [I don't solve it — I tolerate it]",
            "How satisfied are you with your current solution? (1 = Not at all, 5 = Very satisfied)",
            "What's the biggest limitation of your current approach?",
            "Have you ever considered switching to another solution? Yes/No",
            "If something better came along, how likely are you to switch? (1 = Not likely, 5 = Immediately)",
        ],
    },
    GuardrailCategory {
        name: "WILLINGNESS TO PAY",
        description: "Measures if users value the solution enough to pay or switch. Gauges monetization potential.",
        example_questions: &[
            "If a solution solved this problem completely, would you be willing to pay for it?",
            "What is the maximum you'd consider paying for a solution that addresses this need well?",
            "If a solution truly solved this for you, how much would you pay per month for it? (1 = Nothing, 5 = Premium pricing if it works)",
            "What kind of pricing would feel fair to you for solving this?",
            "Have you paid for any similar tools or services before? Yes/No",
            "Which pricing model would you prefer? [Monthly Subscription] [One-time Payment] [Pay-per-use] [Freemium]",
            "How confident are you that you'd pay for a working solution today? (1 = Not at all, 5 = Very confident)",
            "What would stop you from paying for a solution like this?",
        ],
    },
    GuardrailCategory {
        name: "TARGET USER FIT",
        description: "Confirms if the respondent matches the intended persona. Ensures relevance of data.",
        example_questions: &[
            "Which best describes your role when encountering [this problem]?",
            "Have you experienced [this problem] in your personal or professional context?",
            "What best describes your role, background, or daily work/life context?",
            "Which of these applies to you? [Student] [Professional] [Founder] [Other: _______]",
            "How closely do you feel this solution is built for someone like you? (1 = Not at all, 5 = Exactly like me)",
            "Do you regularly face the kind of situations this solution addresses? Yes/No",
            "Who else do you know that faces this same problem?",
            "How many people in your circle would also relate to this issue? [Just me] [A few people] [A lot of people I know]",
        ],
    },
    GuardrailCategory {
        name: "OUTCOME EXPECTATION",
        description: "Understand the result users hope to achieve. Clarifies value proposition.",
        example_questions: &[
            "What would success look like if a product solved this problem for you?",
            "What is the most important result you'd expect from using a product like this?",
            "If this problem was magically solved for you, what would your life/work look like afterward?",
            "How much impact would a working solution make for you? (1 = Minimal, 5 = Game-changing)",
            "What does success look like for you when using a solution to this problem?",
            "What kind of result do you care about most? [Saving time] [Reducing stress] [Saving money] [Improving performance] [Other: ______]",
            "How confident are you that a new product could deliver the outcome you want? (1 = Not at all, 5 = Very confident)",
            "Have you ever tried a tool that failed to meet your expectations? What was missing?",
        ],
    },
    GuardrailCategory {
        name: "DEMOGRAPHIC FIT",
        description: "Captures job, location, age, behavior, etc. Useful for segmentation.",
        example_questions: &[
            "What is your age group, job role, or industry (if relevant to this context)?",
            "Which category best describes your current situation as it relates to [this product/problem]?",
            "Which of these best describes your role or occupation? [Student] [Working professional] [Entrepreneur] [Freelancer] [Other: ______]",
            "Which city and country are you based in?",
            "How experienced are you in [problem area]? (1 = Newbie, 5 = Very experienced)",
            "What is your age range? [Under 18] [18–24] [25–34] [35–44] [45+]",
            "Do you consider yourself tech-savvy? Yes/No",
            "Briefly describe your work/study background (e.g., design, tech, healthcare, education).",
        ],
    },
    GuardrailCategory {
        name: "MARKET TIMING SENSITIVITY",
        description: "Whether users feel this is the right time for the solution. Signals market readiness.",
        example_questions: &[
            "Is solving this problem a priority for you this month/quarter/year?",
            "If this product were available today, how soon would you consider trying it?",
            "How urgent is this problem for you right now? (1 = Can wait, 5 = Needs solving immediately)",
            "Why do you think now is the right time for a solution like this?",
            "If this was available today, how soon would you try it? [Immediately] [Within a week] [Eventually] [Never]",
            "Has something changed recently that made this problem worse? Yes/No",
            "Do you think the timing is right for this solution to succeed in the market? (1 = Too early, 5 = Just right)",
            "What would make now the best time to bring this idea to life?",
        ],
    },
];

const PROTOTYPE_GUARDRAILS: &[GuardrailCategory] = &[
    GuardrailCategory {
        name: "WILLINGNESS TO PAY",
        description: "Measures if users value the solution enough to pay or switch. Gauges monetization potential.",
        example_questions: &[
            "If this product solved your problem well, how likely are you to pay for it? (1 = Not at all, 5 = Definitely)",
            "What would feel like a fair monthly or one-time price for this product?",
            "Have you paid for similar tools or services before? Yes/No",
            "Which pricing model would you prefer? [Monthly subscription] [One-time fee] [Freemium + premium upgrade] [Pay-per-use]",
            "How confident are you that this product is worth paying for? (1 = Not confident, 5 = Absolutely worth it)",
            "What would make you willing to pay more for this product?",
            "If this product improved [key feature], would you consider upgrading to a paid version? Yes/No",
            "How painful would it be to lose access to this tool once you've used it? (1 = Not at all, 5 = Very painful)",
        ],
    },
    GuardrailCategory {
        name: "TARGET USER FIT",
        description: "Confirms if the respondent matches the intended persona. Ensures relevance of data.",
        example_questions: &[
            "What do you do professionally (or in daily life)?",
            "Does this product feel like it's designed for someone like you? Yes/No",
            "How well does this solution fit your lifestyle/workflow? (1 = Not at all, 5 = Perfect fit)",
            "Which industry best describes your work? [Tech] [Education] [Healthcare] [Finance] [Other]",
            "How often do you face the problem this product solves?",
            "Do you feel like your use case was clearly considered in the prototype? (1 = Not at all, 5 = Definitely)",
            "Would you be willing to join a user feedback or beta testing group for this product? Yes/No",
            "What's the #1 reason this product does or doesn't feel like it's for you?",
        ],
    },
    GuardrailCategory {
        name: "FEATURE PRIORITY",
        description: "Identifies which features matter most to the user. Prioritizes MVP scope.",
        example_questions: &[
            "What's the one feature in this product you would not want to lose?",
            "Which feature do you consider absolutely essential? [Feature A] [Feature B] [Feature C] [None of these]",
            "How useful is [specific feature] to your workflow? (1 = Not useful, 5 = Extremely useful)",
            "Rank these features based on importance to you.",
            "If we removed your favorite feature, would you still use this product? Yes/No",
            "Which feature feels unnecessary or overbuilt right now?",
            "How well does the current feature set solve your problem? (1 = Poorly, 5 = Perfectly)",
            "What feature do you wish we had included in this version?",
        ],
    },
    GuardrailCategory {
        name: "FREQUENCY OF USE",
        description: "How often the product would be used. Estimates stickiness and utility.",
        example_questions: &[
            "How often would you use this tool if it worked perfectly? (1 = Once a year, 5 = Daily)",
            "What type of task would make you return to this product often?",
            "Would this replace any tool or habit you currently use? Yes/No",
            "When would you most likely use this? [Daily task] [Weekly planning] [Monthly project] [Emergency-only]",
            "What would increase your frequency of use?",
            "How much does the product feel like a \"daily tool\" vs. a \"one-off\"? (1 = One-off, 5 = Daily essential)",
            "Would you recommend your team or colleagues use it regularly? Yes/No",
            "What needs to change for this tool to become part of your routine?",
        ],
    },
    GuardrailCategory {
        name: "ADOPTION BARRIERS",
        description: "What might stop the user from trying the product. Uncovers friction or confusion.",
        example_questions: &[
            "What would prevent you from using this product regularly?",
            "What's the biggest barrier to adoption? [I don't understand it] [Trust issues] [Too expensive] [Doesn't solve my problem fully] [No clear need right now]",
            "How easy was the product to understand and get started with? (1 = Very hard, 5 = Super easy)",
            "Did you feel confident using the product on your own? Yes/No",
            "How likely are you to continue using this after the first try? (1 = Not likely, 5 = Very likely)",
            "What additional help (onboarding, demos, videos) would make you adopt this faster?",
            "What was confusing about the product (if anything)? [Interface] [Features] [Terminology] [Nothing was confusing]",
            "What's one thing we can fix to make adoption frictionless?",
        ],
    },
    GuardrailCategory {
        name: "OUTCOME EXPECTATION",
        description: "Understand the result users hope to achieve. Clarifies value proposition.",
        example_questions: &[
            "What was the result you expected from using the prototype?",
            "Did this product deliver the outcome you hoped for? Yes/No",
            "How satisfied were you with the end result? (1 = Not at all, 5 = Extremely)",
            "What did the product not do that you expected it to?",
            "What type of value do you expect most from this tool? [Save time] [Save money] [Reduce effort] [Improve output]",
            "How well did this match your mental model of the ideal solution? (1 = Not close, 5 = Spot on)",
            "If we improved one thing to better match your expectations, what would it be?",
            "Would you say the product is effective enough to solve your problem long-term? Yes/No",
        ],
    },
    GuardrailCategory {
        name: "DEMOGRAPHIC FIT",
        description: "Captures job, location, age, behavior, etc. Useful for segmentation.",
        example_questions: &[
            "What is your age range? [Under 18] [18–24] [25–34] [35–44] [45–54] [55+]",
            "What city and country are you currently based in?",
            "What is your highest level of education? [High school] [Bachelor's degree] [Master's degree] [PhD] [Other]",
            "What is your current profession or area of work/study?",
            "Do you use digital tools or software regularly in your daily routine? Yes/No",
            "How would you describe your tech familiarity? [Beginner] [Intermediate] [Advanced] [Expert]",
            "How often do you face the specific problem this product aims to solve?",
            "How much does this product fit people in your demographic group? (1 = Not at all, 5 = Perfectly)",
        ],
    },
    GuardrailCategory {
        name: "REFERRAL LIKELIHOOD",
        description: "Whether users would tell others about the product. Measures viral potential.",
        example_questions: &[
            "How likely are you to recommend this product to someone else? (1 = Never, 5 = Definitely)",
            "Why would or wouldn't you tell a friend or colleague about this?",
            "Would you share this product on your LinkedIn/Twitter/WhatsApp group? Yes/No",
            "Who in your network would find this most useful? [Coworkers] [Friends] [Students] [Industry peers] [Not sure]",
            "How confident are you in the value this product delivers to others? (1 = Not confident, 5 = Very confident)",
            "What feature or moment made you say \"Wow — others need this\"?",
            "Would you refer this product if you got early access or perks? Yes/No",
            "What would make this product something you're proud to recommend?",
        ],
    },
];

const VALIDATION_GUARDRAILS: &[GuardrailCategory] = &[
    GuardrailCategory {
        name: "PRODUCT SATISFACTION",
        description: "Overall satisfaction with the product as it exists today. Baseline signal for product-market fit.",
        example_questions: &[
            "How satisfied are you with the product overall? (1 = Very dissatisfied, 5 = Very satisfied)",
            "How disappointed would you be if you could no longer use this product? [Very disappointed] [Somewhat disappointed] [Not disappointed]",
            "What's the single best thing about the product right now?",
            "What almost made you stop using the product?",
            "Has the product gotten better or worse since you started using it? [Better] [Same] [Worse]",
        ],
    },
    GuardrailCategory {
        name: "RECOMMENDATION LIKELIHOOD",
        description: "Whether current users would recommend the product. Proxy for word-of-mouth growth.",
        example_questions: &[
            "How likely are you to recommend this product to a friend or colleague? (1 = Not at all, 10 = Extremely likely)",
            "Have you already told anyone about this product? Yes/No",
            "Who would you recommend this product to, and why?",
            "What would need to change before you'd recommend it?",
        ],
    },
    GuardrailCategory {
        name: "USAGE PATTERNS",
        description: "How and when the product is actually used. Separates claimed value from lived behavior.",
        example_questions: &[
            "How often have you used the product in the last month? [Daily] [Weekly] [A few times] [Once] [Never]",
            "Which part of the product do you use most?",
            "Walk us through the last time you used the product — what were you trying to do?",
            "Is the product part of your routine, or do you have to remember to use it? [Routine] [I have to remember]",
            "What usually triggers you to open the product?",
        ],
    },
    GuardrailCategory {
        name: "ADOPTION BARRIERS",
        description: "Friction that keeps usage below potential. Uncovers confusion, trust gaps, and workflow mismatches.",
        example_questions: &[
            "What nearly stopped you from getting started? [Setup effort] [Unclear value] [Price] [Trust] [Nothing]",
            "How easy is the product to use day to day? (1 = Very hard, 5 = Effortless)",
            "Is there a step in the product that regularly slows you down? Which one?",
            "Did you need help from anyone to start using the product? Yes/No",
        ],
    },
    GuardrailCategory {
        name: "FEATURE GAPS",
        description: "What users reach for and don't find. Drives the iteration backlog.",
        example_questions: &[
            "What's the one thing you wish the product did that it doesn't today?",
            "Have you had to use another tool alongside this product to finish a task? Which one?",
            "Which existing feature falls short of what you need? Why?",
            "If the next release could contain only one improvement, what should it be?",
        ],
    },
    GuardrailCategory {
        name: "PRICING SENSITIVITY",
        description: "How current pricing lands with real users. Gauges perceived value against cost.",
        example_questions: &[
            "Is the current price fair for the value you get? (1 = Far too expensive, 5 = A bargain)",
            "At what price would this product feel too expensive to consider?",
            "At what price would it feel so cheap you'd doubt the quality?",
            "Which would you prefer? [Lower price, fewer features] [Current price, current features] [Higher price, more features]",
        ],
    },
    GuardrailCategory {
        name: "VALUE PERCEPTION",
        description: "What outcome users believe the product delivers. Tests whether the promised value is the experienced value.",
        example_questions: &[
            "In your own words, what does this product do for you?",
            "How much time or money has the product saved you, roughly?",
            "Which promise drew you in, and has the product kept it? Yes/No — and why?",
            "How essential is the product to your work/life today? (1 = Nice to have, 5 = Can't work without it)",
        ],
    },
    GuardrailCategory {
        name: "TARGET USER FIT",
        description: "Confirms the respondent matches the persona the iteration is aimed at. Ensures relevance of data.",
        example_questions: &[
            "What best describes your role or daily context?",
            "Does the product feel built for someone like you? (1 = Not at all, 5 = Exactly for me)",
            "How long have you been using the product? [Under a week] [A month] [Several months] [Since launch]",
            "Do you use the product for work, personal life, or both? [Work] [Personal] [Both]",
        ],
    },
];

const LAUNCH_GUARDRAILS: &[GuardrailCategory] = &[
    GuardrailCategory {
        name: "MARKET POSITIONING",
        description: "How the product is perceived against alternatives. Validates the go-to-market story.",
        example_questions: &[
            "When you first heard about this product, what did you think it was for?",
            "Which products would you compare this to? [Competitor A] [Competitor B] [Nothing like it] [Other: ______]",
            "What makes this product different from the alternatives, in your words?",
            "Is this product a must-have or a nice-to-have for you? [Must-have] [Nice-to-have]",
        ],
    },
    GuardrailCategory {
        name: "MESSAGING CLARITY",
        description: "Whether the pitch communicates the value in one pass. Catches launch copy that confuses.",
        example_questions: &[
            "After reading our description, how clear is what the product does? (1 = Totally unclear, 5 = Crystal clear)",
            "Which phrase best describes the product to you? [Option A] [Option B] [Option C]",
            "What question did our messaging leave unanswered?",
            "Explain the product to a colleague in one sentence — what would you say?",
        ],
    },
    GuardrailCategory {
        name: "CHANNEL PREFERENCE",
        description: "Where target users expect to discover and buy products like this. Informs distribution spend.",
        example_questions: &[
            "Where do you usually discover new tools like this? [Search] [Social media] [Word of mouth] [App stores] [Communities]",
            "Which channel would you trust most for a recommendation? [Colleague] [Online review] [Influencer] [Ad]",
            "Have you ever bought a product in this category online? Yes/No",
            "What would make you click on this product if you saw it in a feed?",
        ],
    },
    GuardrailCategory {
        name: "PURCHASE DECISION PROCESS",
        description: "Who decides and what they need to say yes. Surfaces hidden approvers and evaluation steps.",
        example_questions: &[
            "Who else is involved when you adopt a tool like this? [Just me] [My team] [My manager] [Procurement]",
            "How long does it usually take you to go from discovering a tool to paying for it? [Same day] [A week] [A month] [Longer]",
            "What evidence do you need before committing? [Free trial] [Case studies] [Reviews] [Demo call]",
            "What's the last tool you adopted, and what convinced you?",
        ],
    },
    GuardrailCategory {
        name: "ONBOARDING EXPERIENCE",
        description: "First-session friction. A launch lives or dies on time-to-first-value.",
        example_questions: &[
            "How long did it take to get value from the product the first time? [Minutes] [Hours] [Days] [Still waiting]",
            "How easy was setup? (1 = Painful, 5 = Effortless)",
            "Where did you get stuck during your first session, if anywhere?",
            "Did you need documentation or support to get started? Yes/No",
        ],
    },
    GuardrailCategory {
        name: "RETENTION DRIVERS",
        description: "What keeps users coming back after the launch spike. Separates curiosity from durable demand.",
        example_questions: &[
            "What would make you return to the product next week?",
            "Which single feature keeps you using the product? ",
            "If the product disappeared tomorrow, what would you do instead?",
            "How likely are you to still be using this in three months? (1 = Unlikely, 5 = Certain)",
        ],
    },
    GuardrailCategory {
        name: "COMPETITIVE ALTERNATIVES",
        description: "What users would switch from, and what switching costs them. Sizes the displacement opportunity.",
        example_questions: &[
            "What are you using today for this job? [Competitor] [Spreadsheets/manual] [Internal tool] [Nothing]",
            "What would you lose by switching to this product from your current approach?",
            "How locked in are you to your current solution? (1 = Free to move, 5 = Completely locked in)",
            "What would a new product have to offer to make you switch immediately?",
        ],
    },
    GuardrailCategory {
        name: "DEMOGRAPHIC FIT",
        description: "Captures job, location, age, behavior, etc. Useful for segmenting launch-audience data.",
        example_questions: &[
            "What is your current profession or area of work/study?",
            "Which industry best describes your work? [Tech] [Education] [Healthcare] [Finance] [Other]",
            "What is your age range? [Under 18] [18–24] [25–34] [35–44] [45+]",
            "Which city and country are you based in?",
        ],
    },
];

const GROWTH_GUARDRAILS: &[GuardrailCategory] = &[
    GuardrailCategory {
        name: "GROWTH CONSTRAINTS",
        description: "What stops heavier or wider use by existing customers. Locates the binding constraint on growth.",
        example_questions: &[
            "What stops you from using the product more than you do today? [Price] [Missing features] [Team buy-in] [Nothing]",
            "Have you hit a limit in the product that made you consider alternatives? Yes/No — which one?",
            "If usage doubled tomorrow, what would break first for you?",
            "What would need to change for your whole team to use the product?",
        ],
    },
    GuardrailCategory {
        name: "EXPANSION APPETITE",
        description: "Whether current users would adopt adjacent offerings. Tests upsell and cross-sell room.",
        example_questions: &[
            "If we offered a premium tier with [capability], how interested would you be? (1 = Not at all, 5 = Take my money)",
            "Which add-on would you pay extra for? [Option A] [Option B] [Option C] [None]",
            "Would you use the product for other projects or teams than you do today? Yes/No",
            "What related problem do you wish we also solved?",
        ],
    },
    GuardrailCategory {
        name: "NEW USE CASES",
        description: "Jobs users already stretch the product to do. Reveals organic expansion paths worth productizing.",
        example_questions: &[
            "Have you used the product for something we probably didn't design it for? Tell us about it.",
            "Which other task in your week feels like it belongs in this product?",
            "Do you export data from the product into other tools? Which ones, and why?",
            "Who else in your organization could use this product, and for what?",
        ],
    },
    GuardrailCategory {
        name: "LIFETIME VALUE",
        description: "Depth and durability of the customer relationship. Informs retention economics.",
        example_questions: &[
            "How long do you expect to keep using the product? [Months] [A year] [Years] [Indefinitely]",
            "Has your usage grown, shrunk, or stayed flat over the last six months? [Grown] [Flat] [Shrunk]",
            "Would you upgrade your plan if your usage grew? Yes/No",
            "What would make you a customer for life?",
        ],
    },
    GuardrailCategory {
        name: "PRICING OPTIMIZATION",
        description: "Where current pricing leaves value uncaptured or deals blocked. Guides packaging changes.",
        example_questions: &[
            "Does the current pricing model match how you get value from the product? Yes/No — what would fit better?",
            "Which would you choose? [Usage-based pricing] [Flat monthly] [Annual discount] [Per-seat]",
            "Have you ever hit a pricing tier that made you reduce usage? Yes/No",
            "What's the most you'd pay before looking seriously at alternatives?",
        ],
    },
    GuardrailCategory {
        name: "COMPETITIVE DIFFERENTIATION",
        description: "Why users stay when alternatives knock. Tests whether the moat is real.",
        example_questions: &[
            "Have you evaluated a competitor while using our product? Which one, and what happened?",
            "What does this product do that you believe nothing else does?",
            "If a competitor offered the same features 20% cheaper, would you switch? (1 = Immediately, 5 = Never)",
            "What would you miss most if you moved to a competitor?",
        ],
    },
    GuardrailCategory {
        name: "ADVOCACY POTENTIAL",
        description: "Whether satisfied users convert into an acquisition channel. Measures referral economics.",
        example_questions: &[
            "Have you recommended the product to anyone this quarter? Yes/No",
            "How likely are you to recommend this product? (1 = Never, 10 = Already have)",
            "Would a referral reward make you more likely to share it? [Yes] [No] [I'd share it anyway]",
            "What story would you tell a peer to convince them to try it?",
        ],
    },
    GuardrailCategory {
        name: "CHURN RISK",
        description: "Early signals that a customer is drifting away. Feeds the retention playbook.",
        example_questions: &[
            "Have you considered cancelling in the last three months? Yes/No — what prompted it?",
            "How painful would losing access be today? (1 = Wouldn't notice, 5 = Major disruption)",
            "Is there a tool you're keeping an eye on as a replacement? Which one?",
            "What's the one thing we could do to make sure you stay?",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_stage_has_a_nonempty_catalog() {
        for stage in LifecycleStage::ALL {
            assert!(
                !categories_for(stage).is_empty(),
                "stage {stage} has no guardrail categories"
            );
        }
    }

    #[test]
    fn test_category_names_are_unique_within_each_stage() {
        for stage in LifecycleStage::ALL {
            let mut seen = HashSet::new();
            for category in categories_for(stage) {
                assert!(
                    seen.insert(category.name),
                    "duplicate category '{}' in stage {stage}",
                    category.name
                );
            }
        }
    }

    #[test]
    fn test_every_category_carries_description_and_examples() {
        for stage in LifecycleStage::ALL {
            for category in categories_for(stage) {
                assert!(!category.description.trim().is_empty());
                assert!(
                    !category.example_questions.is_empty(),
                    "category '{}' ({stage}) has no example questions",
                    category.name
                );
            }
        }
    }

    #[test]
    fn test_ideation_catalog_leads_with_problem_relevance() {
        let categories = categories_for(LifecycleStage::IdeationAndPlanning);
        assert_eq!(categories[0].name, "PROBLEM RELEVANCE");
        assert_eq!(categories.len(), 8);
    }

    #[test]
    fn test_prototype_catalog_covers_pay_and_feature_priority() {
        let names: Vec<&str> = categories_for(LifecycleStage::PrototypeDevelopment)
            .iter()
            .map(|c| c.name)
            .collect();
        assert!(names.contains(&"WILLINGNESS TO PAY"));
        assert!(names.contains(&"FEATURE PRIORITY"));
    }
}
