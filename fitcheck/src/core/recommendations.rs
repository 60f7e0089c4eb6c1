//! Static recommendation text, looked up by test and tier.

use super::tier::Tier;

/// Shown alongside the per-side advice whenever a paired test is asymmetric.
pub const ASYMMETRY_ADVISORY: &str = "Attention: Asymmetry! ⚠️ Focus your efforts on the weaker side. Assess the innervation of the corresponding spinal segments, evaluate the activation and function of adjacent muscles, strengthen weakened muscles, and relieve muscle spasms or tension.";

pub fn breath_hold(tier: Tier) -> &'static str {
    match tier {
        Tier::Excellent => "Excellent cardiorespiratory endurance. All types of activities are suitable for further training. Keep it up and maintain a high level of physical activity to preserve excellent shape.",
        Tier::Good => "Excellent result at this level. To continue improvements, add yoga, functional exercises, and TRX training for comprehensive body work and improved flexibility.",
        Tier::Average => "Initial level of cardiorespiratory endurance. For further progress, add breathing practices and endurance training, as well as start working with interval cardio sessions to increase endurance with heart rate control.",
        Tier::Minimal => "Efforts are needed for improvement. If values are below 30 seconds, it may indicate high stress, body acidification, and low endurance levels; it is necessary to improve overall health. It is recommended to focus on increasing general physical fitness and including regular cardio loads.",
    }
}

pub fn grip(tier: Tier) -> &'static str {
    match tier {
        Tier::Excellent => "Excellent result! All types of activities are suitable for further physical fitness improvement. Maintain a high level of training, and continue developing your skills.",
        Tier::Good => "Good result, however it can be improved with TRX and functional exercises. This will help develop strength, endurance, and improve overall physical fitness.",
        Tier::Average => "Add strength training and learn to activate muscles more effectively. Work on engaging all muscle groups to improve results and progress.",
        Tier::Minimal => "Focus on functional strength training and myofascial release to relieve spasms. If the strength difference between the right and left hand exceeds 15%, it is recommended to consult an osteopath or massage therapist to relieve tension in the arm, neck, and trapezius muscle to prevent injuries and improve results.",
    }
}

pub fn pulse_recovery(tier: Tier) -> &'static str {
    match tier {
        Tier::Excellent => "The heart's response to load is excellent, you can increase the complexity of workouts. The body is well prepared and effectively handles loads without signs of overfatigue. Excellent adaptation allows for workouts without restrictions, but it is recommended to monitor the pulse in particularly complex workouts to ensure safety.",
        Tier::Good => "The heart's response to load is very good, the body is well prepared and effectively handles loads without signs of overfatigue. Good adaptation allows for intense workouts and practices without significant restrictions, but always consider individual sensations.",
        Tier::Average => "The pulse response to load is average, indicating insufficient adaptation for more intense workouts. Need to improve adaptation and expand the program by adding endurance training, including resistance band exercises, cardio, and TRX. Integrate more cardio and functional training for further progress.",
        Tier::Minimal => "The pulse response to load is elevated, which may indicate the need for additional attention to overall health and the cardiovascular system. It is recommended to carefully monitor the pulse during all intense workouts to avoid overloads. Include breathing exercises for improved recovery and light cardio sessions for gradual adaptation.",
    }
}

pub fn leg_flexibility(tier: Tier) -> &'static str {
    match tier {
        Tier::Excellent => "Excellent flexibility! Keep it up. If there is hypermobility, it is recommended to additionally strengthen muscles to maintain stability and prevent injuries.",
        Tier::Good => "Continue developing flexibility by adding more complex stretching workouts and functional exercises to improve mobility and strengthen muscles.",
        Tier::Average => "It is recommended to include practices for relieving muscle clamps and injury prevention: myofascial release (MFR), massage, yoga, and somatic methods to increase flexibility and mobility.",
        Tier::Minimal => "Consultation with an osteopath, massage, and basic stretching exercises, as well as light yoga, are required to improve flexibility and eliminate muscle tensions.",
    }
}

pub fn shoulder_flexibility(tier: Tier) -> &'static str {
    match tier {
        Tier::Excellent => "Superior result. Excellent flexibility and neuromuscular coordination. Maintain current routine, and include controlled strength and mobility workouts to support joint health and prevent overstretching.",
        Tier::Good => "Significant progress. Good shoulder mobility and flexibility. Continue improving by adding functional training methods (e.g., TRX, yoga) and more advanced flexibility exercises while maintaining safe technique.",
        Tier::Average => "There is potential for improvement. Recommended to include myofascial release (MFR), massage, yoga, and exercises to relieve muscular tension and activate stabilizing muscles. This will enhance flexibility and help prevent injuries.",
        Tier::Minimal => "Efforts are needed for improvement. Possible issues with posture, innervation, or past shoulder injuries. A consultation with an osteopath is recommended, regular massage, and basic stretching exercises are recommended. Light yoga and gentle mobility work will help restore range of motion and reduce muscle tension.",
    }
}

pub fn balance(tier: Tier) -> &'static str {
    match tier {
        Tier::Excellent => "Superior result. Your balance is at the highest level! All types of activities are suitable. Maintain this level and continue training to improve stabilization.",
        Tier::Good => "Significant progress. Excellent result, you can move to more complex training programs. Add more complex yoga and TRX for further strengthening of muscles and improvement of balance.",
        Tier::Average => "There is potential for improvement. For further progress, add balance exercises, as well as work with stabilizer muscles to improve coordination and maintain stability.",
        Tier::Minimal => "Efforts are needed for improvement. Consultation with an osteopath and checking the function of foot muscles are required. Focus on stabilization and activation of foot and shin muscles, relieving spasms, osteopathic correction. Add yoga to improve balance and strengthen muscles.",
    }
}
