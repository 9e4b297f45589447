//! Requestable metric identifiers, one closed set per granularity.
//!
//! Each variant maps to the exact API parameter string via `as_str`.
//! 15-minutely data is based on NOAA HRRR for North America and
//! DWD ICON-D2 / Météo-France AROME for Central Europe.

macro_rules! metric_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $param:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// API parameter string for this metric.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $param,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

metric_enum! {
    /// Metrics available for hourly data.
    HourlyMetric {
        Temperature2m => "temperature_2m",
        RelativeHumidity2m => "relative_humidity_2m",
        DewPoint2m => "dew_point_2m",
        ApparentTemperature => "apparent_temperature",
        PressureMsl => "pressure_msl",
        SurfacePressure => "surface_pressure",
        Precipitation => "precipitation",
        PrecipitationProbability => "precipitation_probability",
        Rain => "rain",
        Showers => "showers",
        Snowfall => "snowfall",
        SnowDepth => "snow_depth",
        WeatherCode => "weather_code",
        CloudCover => "cloud_cover",
        CloudCoverLow => "cloud_cover_low",
        CloudCoverMid => "cloud_cover_mid",
        CloudCoverHigh => "cloud_cover_high",
        Visibility => "visibility",
        Evapotranspiration => "evapotranspiration",
        Et0FaoEvapotranspiration => "et0_fao_evapotranspiration",
        VapourPressureDeficit => "vapour_pressure_deficit",
        Cape => "cape",
        FreezingLevelHeight => "freezing_level_height",
        IsDay => "is_day",
        SunshineDuration => "sunshine_duration",
        WindSpeed10m => "wind_speed_10m",
        WindSpeed80m => "wind_speed_80m",
        WindSpeed120m => "wind_speed_120m",
        WindSpeed180m => "wind_speed_180m",
        WindDirection10m => "wind_direction_10m",
        WindDirection80m => "wind_direction_80m",
        WindDirection120m => "wind_direction_120m",
        WindDirection180m => "wind_direction_180m",
        WindGusts10m => "wind_gusts_10m",
        ShortwaveRadiation => "shortwave_radiation",
        DirectRadiation => "direct_radiation",
        DirectNormalIrradiance => "direct_normal_irradiance",
        DiffuseRadiation => "diffuse_radiation",
        GlobalTiltedIrradiance => "global_tilted_irradiance",
        SoilTemperature0cm => "soil_temperature_0cm",
        SoilTemperature6cm => "soil_temperature_6cm",
        SoilTemperature18cm => "soil_temperature_18cm",
        SoilTemperature54cm => "soil_temperature_54cm",
        SoilMoisture0To1cm => "soil_moisture_0_to_1cm",
        SoilMoisture1To3cm => "soil_moisture_1_to_3cm",
        SoilMoisture3To9cm => "soil_moisture_3_to_9cm",
        SoilMoisture9To27cm => "soil_moisture_9_to_27cm",
        SoilMoisture27To81cm => "soil_moisture_27_to_81cm",
    }
}

metric_enum! {
    /// Metrics available for daily aggregated data.
    DailyMetric {
        WeatherCode => "weather_code",
        Temperature2mMax => "temperature_2m_max",
        Temperature2mMin => "temperature_2m_min",
        Temperature2mMean => "temperature_2m_mean",
        ApparentTemperatureMax => "apparent_temperature_max",
        ApparentTemperatureMin => "apparent_temperature_min",
        ApparentTemperatureMean => "apparent_temperature_mean",
        Sunrise => "sunrise",
        Sunset => "sunset",
        SunshineDuration => "sunshine_duration",
        DaylightDuration => "daylight_duration",
        PrecipitationSum => "precipitation_sum",
        RainSum => "rain_sum",
        ShowersSum => "showers_sum",
        SnowfallSum => "snowfall_sum",
        PrecipitationHours => "precipitation_hours",
        PrecipitationProbabilityMax => "precipitation_probability_max",
        PrecipitationProbabilityMin => "precipitation_probability_min",
        PrecipitationProbabilityMean => "precipitation_probability_mean",
        WindSpeed10mMax => "wind_speed_10m_max",
        WindGusts10mMax => "wind_gusts_10m_max",
        WindDirection10mDominant => "wind_direction_10m_dominant",
        ShortwaveRadiationSum => "shortwave_radiation_sum",
        Et0FaoEvapotranspiration => "et0_fao_evapotranspiration",
        UvIndexMax => "uv_index_max",
        UvIndexClearSkyMax => "uv_index_clear_sky_max",
    }
}

metric_enum! {
    /// Metrics available for current conditions.
    CurrentMetric {
        Temperature2m => "temperature_2m",
        RelativeHumidity2m => "relative_humidity_2m",
        ApparentTemperature => "apparent_temperature",
        IsDay => "is_day",
        Precipitation => "precipitation",
        Rain => "rain",
        Showers => "showers",
        Snowfall => "snowfall",
        WeatherCode => "weather_code",
        CloudCover => "cloud_cover",
        PressureMsl => "pressure_msl",
        SurfacePressure => "surface_pressure",
        WindSpeed10m => "wind_speed_10m",
        WindDirection10m => "wind_direction_10m",
        WindGusts10m => "wind_gusts_10m",
    }
}

metric_enum! {
    /// Metrics available for 15-minutely data.
    Minutely15Metric {
        Temperature2m => "temperature_2m",
        RelativeHumidity2m => "relative_humidity_2m",
        DewPoint2m => "dew_point_2m",
        ApparentTemperature => "apparent_temperature",
        ShortwaveRadiation => "shortwave_radiation",
        DirectRadiation => "direct_radiation",
        DirectNormalIrradiance => "direct_normal_irradiance",
        DiffuseRadiation => "diffuse_radiation",
        GlobalTiltedIrradiance => "global_tilted_irradiance",
        GlobalTiltedIrradianceInstant => "global_tilted_irradiance_instant",
        SunshineDuration => "sunshine_duration",
        LightningPotential => "lightning_potential",
        Precipitation => "precipitation",
        Snowfall => "snowfall",
        SnowfallHeight => "snowfall_height",
        Rain => "rain",
        Showers => "showers",
        FreezingLevelHeight => "freezing_level_height",
        Cape => "cape",
        WeatherCode => "weather_code",
        Visibility => "visibility",
        WindSpeed10m => "wind_speed_10m",
        WindSpeed80m => "wind_speed_80m",
        WindDirection10m => "wind_direction_10m",
        WindDirection80m => "wind_direction_80m",
        WindGusts10m => "wind_gusts_10m",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_strings_match_api_parameters() {
        assert_eq!(HourlyMetric::Temperature2m.as_str(), "temperature_2m");
        assert_eq!(
            HourlyMetric::SoilMoisture0To1cm.as_str(),
            "soil_moisture_0_to_1cm"
        );
        assert_eq!(DailyMetric::Temperature2mMax.as_str(), "temperature_2m_max");
        assert_eq!(CurrentMetric::WeatherCode.as_str(), "weather_code");
        assert_eq!(
            Minutely15Metric::LightningPotential.to_string(),
            "lightning_potential"
        );
    }
}
