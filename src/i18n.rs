/// Static localization tables
///
/// Plain hand-written lookup tables keyed by language. There is no
/// translation engine: every screen picks the bundle for the active
/// language and reads `&'static str` fields from it.

/// Languages the interface ships with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Si,
    Ta,
}

/// All languages, in picker order
pub const ALL_LANGUAGES: [Language; 3] = [Language::En, Language::Si, Language::Ta];

impl Language {
    /// Native display name, used by the language picker
    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Si => "සිංහල",
            Language::Ta => "தமிழ்",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Strings for the landing screen
pub struct LandingStrings {
    pub app_title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub disease_detection: &'static str,
    pub disease_desc: &'static str,
    pub yield_prediction: &'static str,
    pub yield_desc: &'static str,
    pub get_started: &'static str,
    pub learn_more: &'static str,
}

/// Strings for the disease detection screen
pub struct DiseaseStrings {
    pub back_to_home: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub instructions_title: &'static str,
    pub instructions: &'static [&'static str],
    pub photo_tips: &'static str,
    pub tips_content: &'static [&'static str],
    pub upload_area: &'static str,
    pub supported_formats: &'static str,
    pub browse: &'static str,
    pub file_selected: &'static str,
    pub upload_button: &'static str,
    pub uploading: &'static str,
    pub clear: &'static str,
    pub analysis_banner: &'static str,
    pub analysis_detail: &'static str,
    pub analysis_done: &'static str,
    pub analysis_failed: &'static str,
    pub unsupported_file: &'static str,
}

/// Strings for the yield prediction screen
///
/// The three `*_labels` arrays are display labels for the option sets in
/// `state::form`, parallel element by element to the stable keys there.
pub struct YieldStrings {
    pub back_to_home: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub plant_metrics: &'static str,
    pub environmental_factors: &'static str,
    pub farming_practices: &'static str,
    pub plant_height: &'static str,
    pub plant_height_desc: &'static str,
    pub stem_diameter: &'static str,
    pub stem_diameter_desc: &'static str,
    pub leaf_count: &'static str,
    pub leaf_count_desc: &'static str,
    pub plant_age: &'static str,
    pub plant_age_desc: &'static str,
    pub temperature: &'static str,
    pub temperature_desc: &'static str,
    pub planting_density: &'static str,
    pub planting_density_desc: &'static str,
    pub soil_moisture: &'static str,
    pub soil_moisture_desc: &'static str,
    pub fertilizer: &'static str,
    pub fertilizer_desc: &'static str,
    pub variety: &'static str,
    pub variety_desc: &'static str,
    pub cm: &'static str,
    pub months: &'static str,
    pub celsius: &'static str,
    pub plants_per_hectare: &'static str,
    pub moisture_labels: [&'static str; 3],
    pub fertilizer_labels: [&'static str; 4],
    pub variety_labels: [&'static str; 4],
    pub required: &'static str,
    pub invalid_number: &'static str,
    pub predict_yield: &'static str,
    pub predicting: &'static str,
    pub reset: &'static str,
    pub prediction_banner: &'static str,
    pub prediction_detail: &'static str,
    pub prediction_done: &'static str,
    pub prediction_failed: &'static str,
}

/// Landing bundle for the given language
pub fn landing(lang: Language) -> &'static LandingStrings {
    match lang {
        Language::En => &LANDING_EN,
        Language::Si => &LANDING_SI,
        Language::Ta => &LANDING_TA,
    }
}

/// Disease detection bundle for the given language
pub fn disease(lang: Language) -> &'static DiseaseStrings {
    match lang {
        Language::En => &DISEASE_EN,
        Language::Si => &DISEASE_SI,
        Language::Ta => &DISEASE_TA,
    }
}

/// Yield prediction bundle for the given language
pub fn yield_form(lang: Language) -> &'static YieldStrings {
    match lang {
        Language::En => &YIELD_EN,
        Language::Si => &YIELD_SI,
        Language::Ta => &YIELD_TA,
    }
}

static LANDING_EN: LandingStrings = LandingStrings {
    app_title: "CassavaAI",
    tagline: "Smart Cassava Farming with AI",
    description: "Detect diseases early and predict yields accurately with our AI-powered tools designed for Sri Lankan farmers.",
    disease_detection: "Disease Detection",
    disease_desc: "Upload photos to identify cassava diseases instantly",
    yield_prediction: "Yield Prediction",
    yield_desc: "Predict your harvest yield with AI analysis",
    get_started: "Get Started",
    learn_more: "Learn More",
};

static LANDING_SI: LandingStrings = LandingStrings {
    app_title: "කැසාවා AI",
    tagline: "AI සමඟ බුද්ධිමත් කැසාවා වගාව",
    description: "ශ්‍රී ලංකා ගොවීන් සඳහා නිර්මාණය කරන ලද අපගේ AI මෙවලම් සමඟ රෝග ඉක්මනින් හඳුනාගෙන අස්වැන්න නිවැරදිව පුරෝකථනය කරන්න.",
    disease_detection: "රෝග හඳුනාගැනීම",
    disease_desc: "කැසාවා රෝග ක්ෂණිකව හඳුනාගැනීමට ඡායාරූප උඩුගත කරන්න",
    yield_prediction: "අස්වැන්න පුරෝකථනය",
    yield_desc: "AI විශ්ලේෂණය සමඟ ඔබේ අස්වැන්න පුරෝකථනය කරන්න",
    get_started: "ආරම්භ කරන්න",
    learn_more: "තව දැනගන්න",
};

static LANDING_TA: LandingStrings = LandingStrings {
    app_title: "கசாவா AI",
    tagline: "AI உடன் புத்திசாலித்தனமான கசாவா விவசாயம்",
    description: "இலங்கை விவசாயிகளுக்காக வடிவமைக்கப்பட்ட எங்கள் AI கருவிகளுடன் நோய்களை விரைவில் கண்டறிந்து மகசூலை துல்லியமாக கணிக்கவும்.",
    disease_detection: "நோய் கண்டறிதல்",
    disease_desc: "கசாவா நோய்களை உடனடியாக அடையாளம் காண புகைப்படங்களை பதிவேற்றவும்",
    yield_prediction: "மகசூல் கணிப்பு",
    yield_desc: "AI பகுப்பாய்வுடன் உங்கள் அறுவடை மகசூலை கணிக்கவும்",
    get_started: "தொடங்குங்கள்",
    learn_more: "மேலும் அறிக",
};

static DISEASE_EN: DiseaseStrings = DiseaseStrings {
    back_to_home: "Back to Home",
    title: "Cassava Disease Detection",
    subtitle: "Upload a photo of a cassava leaf and let AI identify diseases instantly",
    instructions_title: "Instructions",
    instructions: &[
        "Pick a leaf that shows the symptoms clearly",
        "Place the leaf on a plain background",
        "Take the photo in natural daylight",
        "Upload a sharp, well-focused image",
    ],
    photo_tips: "Photo Tips",
    tips_content: &[
        "Avoid shadows falling across the leaf",
        "Fill the frame with the leaf",
        "Hold the camera steady",
    ],
    upload_area: "Drag and drop a leaf photo here, or browse for one",
    supported_formats: "Supported formats: JPG, PNG, GIF, BMP, WEBP",
    browse: "Browse Files",
    file_selected: "File selected",
    upload_button: "Analyze Photo",
    uploading: "Analyzing...",
    clear: "Clear",
    analysis_banner: "AI Analysis in Progress",
    analysis_detail: "Our AI is examining your cassava leaf for diseases...",
    analysis_done: "Analysis complete.",
    analysis_failed: "Analysis failed. Please try again.",
    unsupported_file: "That file is not an image. Please choose a photo.",
};

static DISEASE_SI: DiseaseStrings = DiseaseStrings {
    back_to_home: "මුල් පිටුවට",
    title: "කැසාවා රෝග හඳුනාගැනීම",
    subtitle: "කැසාවා කොළයක ඡායාරූපයක් උඩුගත කර රෝග ක්ෂණිකව හඳුනාගන්න",
    instructions_title: "උපදෙස්",
    instructions: &[
        "රෝග ලක්ෂණ පැහැදිලිව පෙනෙන කොළයක් තෝරන්න",
        "කොළය සරල පසුබිමක් මත තබන්න",
        "ස්වාභාවික ආලෝකයේ ඡායාරූපය ගන්න",
        "පැහැදිලි ඡායාරූපයක් උඩුගත කරන්න",
    ],
    photo_tips: "ඡායාරූප ඉඟි",
    tips_content: &[
        "කොළය මත සෙවණැලි නොවැටෙන සේ බලන්න",
        "රාමුව කොළයෙන් පුරවන්න",
        "කැමරාව ස්ථිරව තබාගන්න",
    ],
    upload_area: "කොළ ඡායාරූපය මෙතැනට ඇද දමන්න, නැතහොත් ගොනුවක් තෝරන්න",
    supported_formats: "සහාය දක්වන ආකෘති: JPG, PNG, GIF, BMP, WEBP",
    browse: "ගොනු තෝරන්න",
    file_selected: "ගොනුව තෝරා ඇත",
    upload_button: "ඡායාරූපය විශ්ලේෂණය කරන්න",
    uploading: "විශ්ලේෂණය වෙමින්...",
    clear: "ඉවත් කරන්න",
    analysis_banner: "AI විශ්ලේෂණය සිදුවෙමින් පවතී",
    analysis_detail: "අපගේ AI ඔබේ කැසාවා කොළය රෝග සඳහා පරීක්ෂා කරමින් සිටී...",
    analysis_done: "විශ්ලේෂණය අවසන්.",
    analysis_failed: "විශ්ලේෂණය අසාර්ථක විය. නැවත උත්සාහ කරන්න.",
    unsupported_file: "මෙය රූප ගොනුවක් නොවේ. ඡායාරූපයක් තෝරන්න.",
};

static DISEASE_TA: DiseaseStrings = DiseaseStrings {
    back_to_home: "முகப்புக்கு திரும்பு",
    title: "கசாவா நோய் கண்டறிதல்",
    subtitle: "கசாவா இலையின் புகைப்படத்தை பதிவேற்றி நோய்களை உடனடியாக கண்டறியவும்",
    instructions_title: "வழிமுறைகள்",
    instructions: &[
        "அறிகுறிகள் தெளிவாக தெரியும் இலையை தேர்ந்தெடுக்கவும்",
        "இலையை எளிய பின்னணியில் வைக்கவும்",
        "இயற்கை வெளிச்சத்தில் புகைப்படம் எடுக்கவும்",
        "தெளிவான புகைப்படத்தை பதிவேற்றவும்",
    ],
    photo_tips: "புகைப்பட குறிப்புகள்",
    tips_content: &[
        "இலையின் மீது நிழல் விழாமல் பார்க்கவும்",
        "இலையால் சட்டகத்தை நிரப்பவும்",
        "கேமராவை அசையாமல் வைத்திருக்கவும்",
    ],
    upload_area: "இலை புகைப்படத்தை இங்கே இழுத்து விடவும் அல்லது கோப்பை தேர்ந்தெடுக்கவும்",
    supported_formats: "ஆதரிக்கப்படும் வடிவங்கள்: JPG, PNG, GIF, BMP, WEBP",
    browse: "கோப்புகளை தேர்ந்தெடு",
    file_selected: "கோப்பு தேர்ந்தெடுக்கப்பட்டது",
    upload_button: "புகைப்படத்தை பகுப்பாய்வு செய்",
    uploading: "பகுப்பாய்வு நடைபெறுகிறது...",
    clear: "அகற்று",
    analysis_banner: "AI பகுப்பாய்வு நடைபெறுகிறது",
    analysis_detail: "எங்கள் AI உங்கள் கசாவா இலையை நோய்களுக்காக ஆய்வு செய்கிறது...",
    analysis_done: "பகுப்பாய்வு முடிந்தது.",
    analysis_failed: "பகுப்பாய்வு தோல்வியடைந்தது. மீண்டும் முயற்சிக்கவும்.",
    unsupported_file: "இது படக் கோப்பு அல்ல. புகைப்படத்தை தேர்ந்தெடுக்கவும்.",
};

static YIELD_EN: YieldStrings = YieldStrings {
    back_to_home: "Back to Home",
    title: "Cassava Yield Prediction",
    subtitle: "Enter your plant and field details to estimate the harvest yield",
    plant_metrics: "Plant Measurements",
    environmental_factors: "Environmental Factors",
    farming_practices: "Farming Practices",
    plant_height: "Plant Height",
    plant_height_desc: "Average height from the ground to the top of the canopy",
    stem_diameter: "Stem Diameter",
    stem_diameter_desc: "Diameter of the main stem, measured about 10 cm above the soil",
    leaf_count: "Leaf Count",
    leaf_count_desc: "Typical number of fully opened leaves per plant",
    plant_age: "Plant Age",
    plant_age_desc: "Months since planting",
    temperature: "Temperature",
    temperature_desc: "Average daytime temperature during the growing season",
    planting_density: "Planting Density",
    planting_density_desc: "Number of plants per hectare",
    soil_moisture: "Soil Moisture",
    soil_moisture_desc: "General moisture level of the field soil",
    fertilizer: "Fertilizer",
    fertilizer_desc: "Type of fertilizer applied this season",
    variety: "Variety",
    variety_desc: "Cassava variety planted in the field",
    cm: "cm",
    months: "months",
    celsius: "°C",
    plants_per_hectare: "plants/ha",
    moisture_labels: ["Low", "Moderate", "High"],
    fertilizer_labels: ["None", "Organic", "Inorganic", "Mixed"],
    variety_labels: ["MU51", "Kirikawadi", "Suranimala", "Swarna"],
    required: "This field is required",
    invalid_number: "Enter a number greater than zero",
    predict_yield: "Predict Yield",
    predicting: "Predicting...",
    reset: "Reset",
    prediction_banner: "AI Prediction in Progress",
    prediction_detail: "Analyzing your plant data to predict cassava yield...",
    prediction_done: "Prediction complete.",
    prediction_failed: "Prediction failed. Please try again.",
};

static YIELD_SI: YieldStrings = YieldStrings {
    back_to_home: "මුල් පිටුවට",
    title: "කැසාවා අස්වැන්න පුරෝකථනය",
    subtitle: "අස්වැන්න ඇස්තමේන්තු කිරීමට ඔබේ වගා තොරතුරු ඇතුළත් කරන්න",
    plant_metrics: "ශාක මිනුම්",
    environmental_factors: "පාරිසරික සාධක",
    farming_practices: "වගා ක්‍රම",
    plant_height: "ශාක උස",
    plant_height_desc: "බිම සිට ශාකයේ ඉහළටම ඇති සාමාන්‍ය උස",
    stem_diameter: "කඳ විෂ්කම්භය",
    stem_diameter_desc: "පස මට්ටමින් සෙ.මී. 10ක් පමණ ඉහළින් මනින ලද ප්‍රධාන කඳේ විෂ්කම්භය",
    leaf_count: "කොළ ගණන",
    leaf_count_desc: "ශාකයකට සම්පූර්ණයෙන් විවෘත වූ කොළ ගණන",
    plant_age: "ශාක වයස",
    plant_age_desc: "සිටුවූ දින සිට ගතවූ මාස ගණන",
    temperature: "උෂ්ණත්වය",
    temperature_desc: "වගා කාලයේ සාමාන්‍ය දිවා උෂ්ණත්වය",
    planting_density: "සිටුවීමේ ඝනත්වය",
    planting_density_desc: "හෙක්ටයාරයකට සිටුවා ඇති ශාක ගණන",
    soil_moisture: "පාංශු තෙතමනය",
    soil_moisture_desc: "වගා බිමේ පසෙහි සාමාන්‍ය තෙතමන මට්ටම",
    fertilizer: "පොහොර",
    fertilizer_desc: "මෙම කන්නයේ යොදන ලද පොහොර වර්ගය",
    variety: "ප්‍රභේදය",
    variety_desc: "වගා කර ඇති කැසාවා ප්‍රභේදය",
    cm: "සෙ.මී.",
    months: "මාස",
    celsius: "°C",
    plants_per_hectare: "ශාක/හෙක්.",
    moisture_labels: ["අඩු", "මධ්‍යම", "ඉහළ"],
    fertilizer_labels: ["නොමැත", "කාබනික", "අකාබනික", "මිශ්‍ර"],
    variety_labels: ["MU51", "කිරිකාවඩි", "සුරනිමලා", "ස්වර්ණා"],
    required: "මෙම ක්ෂේත්‍රය අවශ්‍යයි",
    invalid_number: "ශුන්‍යයට වඩා වැඩි සංඛ්‍යාවක් ඇතුළත් කරන්න",
    predict_yield: "අස්වැන්න පුරෝකථනය කරන්න",
    predicting: "පුරෝකථනය වෙමින්...",
    reset: "නැවත සකසන්න",
    prediction_banner: "AI පුරෝකථනය සිදුවෙමින් පවතී",
    prediction_detail: "ඔබේ ශාක දත්ත විශ්ලේෂණය කරමින් අස්වැන්න පුරෝකථනය කරයි...",
    prediction_done: "පුරෝකථනය අවසන්.",
    prediction_failed: "පුරෝකථනය අසාර්ථක විය. නැවත උත්සාහ කරන්න.",
};

static YIELD_TA: YieldStrings = YieldStrings {
    back_to_home: "முகப்புக்கு திரும்பு",
    title: "கசாவா மகசூல் கணிப்பு",
    subtitle: "அறுவடை மகசூலை மதிப்பிட உங்கள் பயிர் விவரங்களை உள்ளிடவும்",
    plant_metrics: "தாவர அளவீடுகள்",
    environmental_factors: "சுற்றுச்சூழல் காரணிகள்",
    farming_practices: "விவசாய முறைகள்",
    plant_height: "தாவர உயரம்",
    plant_height_desc: "தரையில் இருந்து தாவரத்தின் உச்சி வரையிலான சராசரி உயரம்",
    stem_diameter: "தண்டு விட்டம்",
    stem_diameter_desc: "மண்ணுக்கு மேல் சுமார் 10 செ.மீ உயரத்தில் அளந்த முதன்மை தண்டின் விட்டம்",
    leaf_count: "இலை எண்ணிக்கை",
    leaf_count_desc: "ஒரு தாவரத்தில் முழுமையாக விரிந்த இலைகளின் எண்ணிக்கை",
    plant_age: "தாவர வயது",
    plant_age_desc: "நட்ட நாளிலிருந்து கடந்த மாதங்கள்",
    temperature: "வெப்பநிலை",
    temperature_desc: "வளரும் பருவத்தின் சராசரி பகல் வெப்பநிலை",
    planting_density: "நடவு அடர்த்தி",
    planting_density_desc: "ஒரு ஹெக்டேருக்கு நடப்பட்ட தாவரங்களின் எண்ணிக்கை",
    soil_moisture: "மண் ஈரப்பதம்",
    soil_moisture_desc: "வயல் மண்ணின் பொதுவான ஈரப்பத நிலை",
    fertilizer: "உரம்",
    fertilizer_desc: "இந்த பருவத்தில் இடப்பட்ட உர வகை",
    variety: "ரகம்",
    variety_desc: "வயலில் நடப்பட்ட கசாவா ரகம்",
    cm: "செ.மீ",
    months: "மாதங்கள்",
    celsius: "°C",
    plants_per_hectare: "தாவரங்கள்/ஹெக்.",
    moisture_labels: ["குறைவு", "மிதமானது", "அதிகம்"],
    fertilizer_labels: ["இல்லை", "இயற்கை", "செயற்கை", "கலப்பு"],
    variety_labels: ["MU51", "கிரிகாவடி", "சுரனிமலா", "ஸ்வர்ணா"],
    required: "இந்த புலம் தேவை",
    invalid_number: "பூஜ்ஜியத்தை விட பெரிய எண்ணை உள்ளிடவும்",
    predict_yield: "மகசூலை கணிக்கவும்",
    predicting: "கணிப்பு நடைபெறுகிறது...",
    reset: "மீட்டமை",
    prediction_banner: "AI கணிப்பு நடைபெறுகிறது",
    prediction_detail: "கசாவா மகசூலை கணிக்க உங்கள் தாவர தரவு பகுப்பாய்வு செய்யப்படுகிறது...",
    prediction_done: "கணிப்பு முடிந்தது.",
    prediction_failed: "கணிப்பு தோல்வியடைந்தது. மீண்டும் முயற்சிக்கவும்.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_bundles() {
        for lang in ALL_LANGUAGES {
            assert!(!landing(lang).app_title.is_empty());
            assert!(!disease(lang).title.is_empty());
            assert!(!yield_form(lang).title.is_empty());
        }
    }

    #[test]
    fn test_option_labels_are_filled_in_for_every_language() {
        for lang in ALL_LANGUAGES {
            let bundle = yield_form(lang);
            let labels = bundle
                .moisture_labels
                .iter()
                .chain(&bundle.fertilizer_labels)
                .chain(&bundle.variety_labels);
            for label in labels {
                assert!(!label.is_empty(), "{lang:?}");
            }
        }
    }

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(Language::default(), Language::En);
        assert_eq!(Language::default().name(), "English");
    }
}
