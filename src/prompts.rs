//! Platform flag and the analysis instructions sent alongside a video.

use std::fmt;
use std::str::FromStr;

/// Social platform the uploaded video is targeted at.
///
/// Only selects which analysis prompt is sent to the model; it has no other
/// effect on the request flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Tiktok,
    Linkedin,
}

impl Platform {
    /// The analysis instruction paired with the uploaded video.
    pub fn prompt(self) -> &'static str {
        match self {
            Platform::Linkedin => LINKEDIN_PROMPT,
            Platform::Tiktok => GENERIC_PROMPT,
        }
    }
}

impl FromStr for Platform {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tiktok" => Ok(Platform::Tiktok),
            "linkedin" => Ok(Platform::Linkedin),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Tiktok => f.write_str("tiktok"),
            Platform::Linkedin => f.write_str("linkedin"),
        }
    }
}

const LINKEDIN_PROMPT: &str = "Analyze the following LinkedIn video as a professional social media strategist. Provide a comprehensive evaluation of its effectiveness, considering the following aspects:

Content and messaging: Relevance to LinkedIn's professional audience, Clarity and value of the main message, Appropriateness for B2B or professional networking context

Video structure and length: Effectiveness of the first 6-10 seconds in capturing attention, Overall video length (optimal range is 30 seconds to 2 minutes), Pacing and information density

Visual elements: Professional appearance and production quality, Use of captions or on-screen text (considering 80% of LinkedIn videos are watched on mute), Branding elements and visual consistency

Engagement factors: Call-to-action effectiveness, Potential for generating comments, shares, or professional discussions, Use of hashtags and their relevance

LinkedIn-specific optimization: Native video vs. embedded link (native is preferred), Mobile-friendly format (square or vertical video), Compliance with LinkedIn's video specifications

Professional value: Educational or informative content, Thought leadership potential, Networking or relationship-building aspects

Industry relevance: Alignment with current trends in the professional's field, Demonstration of expertise or unique insights

Accessibility and inclusivity: Use of captions or subtitles, Clarity of speech and visuals for diverse audiences

Areas for improvement: Identify specific elements that could be enhanced, Suggest actionable recommendations for optimization

Provide a balanced analysis, highlighting both strengths and areas for improvement. Support your evaluation with specific examples from the video and relevant LinkedIn best practices. Consider how the video aligns with LinkedIn's professional environment and user behavior. Conclude with an overall assessment of the video's potential effectiveness in achieving its presumed goals on the LinkedIn platform.";

const GENERIC_PROMPT: &str = "Analyze the following video as a professional social media analyst. Provide a comprehensive evaluation of its effectiveness, considering the following aspects:

Content and messaging: Clarity and coherence of the main message, Relevance to the target audience, Storytelling elements and narrative structure

Visual elements: Quality of cinematography and editing, Use of graphics, animations, or special effects, Color grading and overall aesthetic appeal

Audio components: Quality of sound design, Effectiveness of music or background audio, Clarity of voiceovers or dialogue (if applicable)

Engagement factors: Hook and retention strategies in the first few seconds, Pacing and overall video length, Call-to-action effectiveness

Platform optimization: Suitability for the intended social media platform(s), Adherence to platform-specific best practices, Potential for cross-platform adaptation

Brand alignment: Consistency with brand voice and values, Integration of brand elements (logo, colors, etc.)

Technical aspects: Video resolution and overall production quality, Mobile-friendliness and accessibility features

Potential for virality: Shareability factors, Trendjacking or timely elements

Areas for improvement: Identify specific elements that could be enhanced, Suggest actionable recommendations for optimization

Provide a balanced analysis, highlighting both strengths and areas for improvement. Support your evaluation with specific examples from the video and relevant industry best practices. Conclude with an overall assessment of the video's potential effectiveness in achieving its presumed goals on social media platforms.";

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn linkedin_selects_linkedin_prompt() {
        let platform: Platform = "linkedin".parse().unwrap();
        assert_eq!(platform, Platform::Linkedin);
        assert!(platform.prompt().contains("LinkedIn video"));
    }

    #[test]
    fn tiktok_selects_generic_prompt() {
        let platform: Platform = "tiktok".parse().unwrap();
        assert_eq!(platform, Platform::Tiktok);
        assert!(platform.prompt().starts_with("Analyze the following video"));
        assert!(!platform.prompt().contains("LinkedIn"));
    }

    #[test]
    fn unknown_platform_is_rejected() {
        assert!("facebook".parse::<Platform>().is_err());
        assert!("".parse::<Platform>().is_err());
        // Parsing is case-sensitive, matching the form values the SPA sends.
        assert!("LinkedIn".parse::<Platform>().is_err());
    }
}
